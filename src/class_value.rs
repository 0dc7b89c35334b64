/// A single "class-like" input to the merger.
///
/// Mirrors the value shapes accepted by class-name helpers in JS frameworks:
/// plain strings, boolean-gated strings, string-to-boolean mappings, and
/// arbitrarily nested lists of the above. Absent values contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    /// Absent value, ignored during flattening
    None,

    /// One or more whitespace-separated class names
    Text(String),

    /// Class names included only when the flag is true
    Toggle(String, bool),

    /// Mapping from class names to include flags
    Map(Vec<(String, bool)>),

    /// Nested list of class values, flattened in order
    List(Vec<ClassValue>),
}

impl ClassValue {
    /// Append the concrete class chunks of this value to `out`, in order
    fn collect_into(&self, out: &mut String) {
        match self {
            ClassValue::None => {}
            ClassValue::Text(text) => push_chunk(out, text),
            ClassValue::Toggle(text, included) => {
                if *included {
                    push_chunk(out, text);
                }
            }
            ClassValue::Map(entries) => {
                for (text, included) in entries {
                    if *included {
                        push_chunk(out, text);
                    }
                }
            }
            ClassValue::List(values) => {
                for value in values {
                    value.collect_into(out);
                }
            }
        }
    }

    /// True if this value cannot contribute any class names
    pub fn is_empty(&self) -> bool {
        match self {
            ClassValue::None => true,
            ClassValue::Text(text) => text.trim().is_empty(),
            ClassValue::Toggle(text, included) => !included || text.trim().is_empty(),
            ClassValue::Map(entries) => entries
                .iter()
                .all(|(text, included)| !included || text.trim().is_empty()),
            ClassValue::List(values) => values.iter().all(ClassValue::is_empty),
        }
    }
}

/// Append a trimmed chunk, separating it from previous content with a space
fn push_chunk(out: &mut String, chunk: &str) {
    let chunk = chunk.trim();
    if chunk.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(chunk);
}

/// Flatten a sequence of class values into a single space-separated string.
///
/// Falsy entries are dropped; surviving chunks keep their relative order.
/// No conflict resolution is applied here.
pub fn join_values(values: &[ClassValue]) -> String {
    let mut out = String::new();
    for value in values {
        value.collect_into(&mut out);
    }
    out
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Text(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Text(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Text(value.clone())
    }
}

// Bare booleans are ignored, matching the convention where a short-circuited
// conditional leaves a boolean in the argument list.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::None
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ClassValue::None,
        }
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((text, included): (&str, bool)) -> Self {
        ClassValue::Toggle(text.to_string(), included)
    }
}

impl From<(String, bool)> for ClassValue {
    fn from((text, included): (String, bool)) -> Self {
        ClassValue::Toggle(text, included)
    }
}

impl<T: Into<ClassValue> + Clone> From<&[T]> for ClassValue {
    fn from(values: &[T]) -> Self {
        ClassValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty() {
        assert_eq!(join_values(&[]), "");
    }

    #[test]
    fn test_join_text_values() {
        let values = [ClassValue::from("a"), ClassValue::from("b c")];
        assert_eq!(join_values(&values), "a b c");
    }

    #[test]
    fn test_join_skips_false_toggles() {
        let values = [
            ClassValue::from("a"),
            ClassValue::from(("b", false)),
            ClassValue::from(("c", true)),
        ];
        assert_eq!(join_values(&values), "a c");
    }

    #[test]
    fn test_join_skips_bare_booleans() {
        let values = [
            ClassValue::from("a"),
            ClassValue::from(false),
            ClassValue::from(true),
            ClassValue::from("b"),
        ];
        assert_eq!(join_values(&values), "a b");
    }

    #[test]
    fn test_join_map_entries() {
        let values = [ClassValue::Map(vec![
            ("a".to_string(), true),
            ("b".to_string(), false),
        ])];
        assert_eq!(join_values(&values), "a");
    }

    #[test]
    fn test_join_nested_lists() {
        let values = [ClassValue::from(vec![
            ClassValue::from("a"),
            ClassValue::from(vec![ClassValue::from(("b", true)), ClassValue::from("c")]),
        ])];
        assert_eq!(join_values(&values), "a b c");
    }

    #[test]
    fn test_join_from_option() {
        let values = [
            ClassValue::from(Some("a")),
            ClassValue::from(None::<&str>),
            ClassValue::from("b"),
        ];
        assert_eq!(join_values(&values), "a b");
    }

    #[test]
    fn test_join_trims_chunks() {
        let values = [ClassValue::from("  a  "), ClassValue::from("   ")];
        assert_eq!(join_values(&values), "a");
    }

    #[test]
    fn test_is_empty() {
        assert!(ClassValue::None.is_empty());
        assert!(ClassValue::from("   ").is_empty());
        assert!(ClassValue::from(("a", false)).is_empty());
        assert!(!ClassValue::from(("a", true)).is_empty());
        assert!(ClassValue::Map(vec![("a".to_string(), false)]).is_empty());
        assert!(!ClassValue::from("a").is_empty());
    }
}
