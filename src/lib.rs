pub mod args;
pub mod class_value;
pub mod config;
pub mod errors;
pub mod groups;
pub mod merger;
pub mod parser;

pub use args::{Cli, Commands, MergeArgs, PipeArgs};
pub use class_value::{join_values, ClassValue};
pub use config::{ExtendConfig, MergeConfig};
pub use errors::{MergerError, Result};
pub use groups::{GroupRegistry, ValueKind};
pub use merger::ClassMerger;

use std::path::Path;
use std::sync::OnceLock;

/// Shared merger for the default configuration, built on first use
fn default_merger() -> &'static ClassMerger {
    static MERGER: OnceLock<ClassMerger> = OnceLock::new();
    MERGER.get_or_init(ClassMerger::new)
}

/// Merge a sequence of class values into a single resolved class string.
///
/// Flattens the values in order, dropping falsy entries, then resolves
/// conflicting utility classes so the last-specified one of each
/// mutually-exclusive group wins. Returns an empty string when nothing
/// remains.
pub fn merge(values: &[ClassValue]) -> String {
    default_merger().merge_values(values)
}

/// Merge an already-joined, space-separated class string
pub fn merge_classes(class_string: &str) -> String {
    default_merger().merge(class_string)
}

/// Variadic front end for [`merge`].
///
/// Accepts anything convertible into a [`ClassValue`]:
///
/// ```
/// use tailwind_merger::merge;
///
/// let active = true;
/// let merged = merge!("p-2", ("bg-blue-500", active), "p-4");
/// assert_eq!(merged, "bg-blue-500 p-4");
/// ```
#[macro_export]
macro_rules! merge {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::merge(&[$($crate::ClassValue::from($value)),+])
    };
}

/// Build a merger from an optional config file path
fn build_merger(config_path: Option<&Path>) -> Result<ClassMerger> {
    match config_path {
        Some(path) => ClassMerger::from_config_file(path),
        None => Ok(ClassMerger::new()),
    }
}

/// Handle merge command - merge the argument class strings into one result
pub fn run_merge(args: MergeArgs) -> Result<String> {
    // Validate arguments
    args.validate().map_err(MergerError::InvalidInput)?;

    let merger = build_merger(args.config.as_deref())?;

    if args.verbose {
        eprintln!("Merging {} class strings", args.classes.len());
        if let Some(path) = &args.config {
            eprintln!("Config: {}", path.display());
        }
    }

    let joined = args.classes.join(" ");
    let merged = merger.merge(&joined);

    if args.verbose {
        let before = joined.split_whitespace().count();
        let after = merged.split_whitespace().count();
        eprintln!("Resolved {} tokens to {}", before, after);
    }

    Ok(merged)
}

/// Handle pipe command - read class strings from stdin, output merged strings to stdout
#[cfg(feature = "cli")]
pub async fn handle_pipe_command(args: PipeArgs) -> Result<()> {
    use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

    // Read class strings from stdin asynchronously
    let mut input = String::new();
    let mut stdin = io::stdin();
    stdin
        .read_to_string(&mut input)
        .await
        .map_err(|e| MergerError::InputError(format!("Failed to read from stdin: {}", e)))?;

    // If input is empty, produce no output
    if input.trim().is_empty() {
        return Ok(());
    }

    let merger = build_merger(args.config.as_deref())?;

    // Merge line by line so the tool composes with line-oriented pipelines
    let mut output = String::with_capacity(input.len());
    for line in input.lines() {
        output.push_str(&merger.merge(line));
        output.push('\n');
    }

    // Write merged output to stdout asynchronously
    let mut stdout = io::stdout();
    stdout
        .write_all(output.as_bytes())
        .await
        .map_err(|e| MergerError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

    // Ensure output is flushed
    stdout.flush().await.map_err(|e| MergerError::OutputError {
        path: "stdout".to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_no_values() {
        assert_eq!(merge(&[]), "");
        assert_eq!(merge!(), "");
    }

    #[test]
    fn test_merge_drops_falsy_values() {
        assert_eq!(merge!("a", false, "b"), "a b");
    }

    #[test]
    fn test_merge_conflicting_utilities() {
        assert_eq!(merge!("p-2", "p-4"), "p-4");
    }

    #[test]
    fn test_merge_map_value() {
        let value = ClassValue::Map(vec![("a".to_string(), true), ("b".to_string(), false)]);
        assert_eq!(merge(&[value]), "a");
    }

    #[test]
    fn test_merge_classes_matches_merge() {
        assert_eq!(
            merge!("p-2 text-red-500", "p-4"),
            merge_classes("p-2 text-red-500 p-4")
        );
    }

    #[test]
    fn test_merge_is_idempotent_through_free_fn() {
        let once = merge!("p-2", "p-4", "hover:m-1", "hover:m-2", "custom");
        assert_eq!(merge_classes(&once), once);
    }
}
