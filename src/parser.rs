/// A class token decomposed into its variant and utility parts.
///
/// Splitting happens on the configured separator at bracket depth zero, so
/// arbitrary variants like `[&:hover]:underline` keep their inner colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant modifiers in source order, without their trailing separator
    pub modifiers: Vec<&'a str>,

    /// Whether the base utility carries the `!` important marker
    pub important: bool,

    /// Utility name including any postfix modifier, without the `!` marker
    pub full: &'a str,

    /// Utility name without the postfix modifier (equal to `full` when absent)
    pub base: &'a str,

    /// Postfix modifier after the last `/` outside brackets, if any
    pub postfix: Option<&'a str>,
}

/// Decompose a single class token.
///
/// Never fails: tokens that do not follow utility syntax simply come back
/// with everything in `base`, which downstream lookup treats as unrecognized.
pub fn parse<'a>(separator: &str, token: &'a str) -> ParsedClass<'a> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut i = 0usize;

    while i < token.len() {
        if depth == 0 && token[i..].starts_with(separator) {
            modifiers.push(&token[start..i]);
            i += separator.len();
            start = i;
            continue;
        }
        let ch = match token[i..].chars().next() {
            Some(ch) => ch,
            None => break,
        };
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += ch.len_utf8();
    }

    let mut full = &token[start..];
    let important = full.starts_with('!');
    if important {
        full = &full[1..];
    }

    let (base, postfix) = split_postfix(full);

    ParsedClass {
        modifiers,
        important,
        full,
        base,
        postfix,
    }
}

/// Split off a postfix modifier at the last `/` outside brackets.
///
/// The slash must have content on both sides; `w-1/2` splits while `/2` and
/// `w-1/` do not.
fn split_postfix(base: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    let mut slash = None;

    for (idx, ch) in base.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => slash = Some(idx),
            _ => {}
        }
    }

    match slash {
        Some(idx) if idx > 0 && idx + 1 < base.len() => {
            (&base[..idx], Some(&base[idx + 1..]))
        }
        _ => (base, None),
    }
}

/// Build the canonical key for a modifier list.
///
/// Plain modifiers are order-insensitive, so runs of them are sorted;
/// arbitrary modifiers (bracketed selectors) act as position anchors and
/// stay where they are.
pub fn modifier_key(modifiers: &[&str], separator: &str) -> String {
    if modifiers.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&str> = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&str> = Vec::new();

    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    sorted.append(&mut run);

    sorted.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_utility() {
        let parsed = parse(":", "p-4");
        assert!(parsed.modifiers.is_empty());
        assert!(!parsed.important);
        assert_eq!(parsed.base, "p-4");
        assert_eq!(parsed.full, "p-4");
        assert_eq!(parsed.postfix, None);
    }

    #[test]
    fn test_parse_with_modifiers() {
        let parsed = parse(":", "md:hover:bg-blue-500");
        assert_eq!(parsed.modifiers, vec!["md", "hover"]);
        assert_eq!(parsed.base, "bg-blue-500");
    }

    #[test]
    fn test_parse_arbitrary_variant_keeps_inner_colon() {
        let parsed = parse(":", "[&:hover]:underline");
        assert_eq!(parsed.modifiers, vec!["[&:hover]"]);
        assert_eq!(parsed.base, "underline");
    }

    #[test]
    fn test_parse_important_marker() {
        let parsed = parse(":", "hover:!p-4");
        assert_eq!(parsed.modifiers, vec!["hover"]);
        assert!(parsed.important);
        assert_eq!(parsed.base, "p-4");
    }

    #[test]
    fn test_parse_postfix_modifier() {
        let parsed = parse(":", "bg-red-500/50");
        assert_eq!(parsed.base, "bg-red-500");
        assert_eq!(parsed.full, "bg-red-500/50");
        assert_eq!(parsed.postfix, Some("50"));
    }

    #[test]
    fn test_parse_slash_inside_brackets_is_not_postfix() {
        let parsed = parse(":", "w-[calc(100%/3)]");
        assert_eq!(parsed.base, "w-[calc(100%/3)]");
        assert_eq!(parsed.postfix, None);
    }

    #[test]
    fn test_parse_arbitrary_value_with_colon() {
        let parsed = parse(":", "text-[length:16px]");
        assert!(parsed.modifiers.is_empty());
        assert_eq!(parsed.base, "text-[length:16px]");
    }

    #[test]
    fn test_parse_trailing_separator() {
        let parsed = parse(":", "hover:");
        assert_eq!(parsed.modifiers, vec!["hover"]);
        assert_eq!(parsed.base, "");
    }

    #[test]
    fn test_split_postfix_edge_cases() {
        assert_eq!(split_postfix("w-1/2"), ("w-1", Some("2")));
        assert_eq!(split_postfix("/2"), ("/2", None));
        assert_eq!(split_postfix("w-1/"), ("w-1/", None));
        assert_eq!(split_postfix("a/b/c"), ("a/b", Some("c")));
    }

    #[test]
    fn test_modifier_key_sorts_plain_modifiers() {
        assert_eq!(modifier_key(&["hover", "focus"], ":"), "focus:hover");
        assert_eq!(modifier_key(&["focus", "hover"], ":"), "focus:hover");
    }

    #[test]
    fn test_modifier_key_anchors_arbitrary_modifiers() {
        // Plain runs sort independently on each side of the anchor
        assert_eq!(
            modifier_key(&["md", "[&:hover]", "focus"], ":"),
            "md:[&:hover]:focus"
        );
        assert_ne!(
            modifier_key(&["md", "[&:hover]", "focus"], ":"),
            modifier_key(&["focus", "[&:hover]", "md"], ":")
        );
    }

    #[test]
    fn test_modifier_key_empty() {
        assert_eq!(modifier_key(&[], ":"), "");
    }
}
