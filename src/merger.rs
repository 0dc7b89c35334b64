use crate::class_value::{join_values, ClassValue};
use crate::config::MergeConfig;
use crate::errors::Result;
use crate::groups::GroupRegistry;
use crate::parser::{modifier_key, parse};
use std::collections::HashSet;
use std::path::Path;

/// Resolves conflicting utility classes in class strings.
///
/// Owns a built group registry, so constructing one up front and reusing it
/// is cheap per call. Merging is pure: the same input always produces the
/// same output, and a shared merger can be used from any number of threads.
pub struct ClassMerger {
    /// Configuration
    config: MergeConfig,

    /// Utility group registry (defaults plus configured extensions)
    registry: GroupRegistry,
}

impl ClassMerger {
    /// Create a new merger with default configuration
    pub fn new() -> Self {
        Self::with_config(MergeConfig::default())
    }

    /// Create a new merger with custom configuration
    pub fn with_config(config: MergeConfig) -> Self {
        let mut registry = GroupRegistry::with_defaults();
        registry.apply_extensions(&config.extend);

        Self { config, registry }
    }

    /// Load configuration from a file and create a merger
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = MergeConfig::from_file(path)?;
        Ok(Self::with_config(config))
    }

    /// The active configuration
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge a space-separated class string, resolving conflicts.
    ///
    /// Scans tokens back to front; the first occurrence of each conflict key
    /// (modifier set + important marker + utility group) survives and every
    /// earlier occurrence is dropped. Unrecognized tokens always survive.
    pub fn merge(&self, class_string: &str) -> String {
        let tokens: Vec<&str> = class_string.split_whitespace().collect();
        match tokens.len() {
            0 => return String::new(),
            1 => return tokens[0].to_string(),
            _ => {}
        }

        let separator = self.config.separator.as_str();
        let mut kept = vec![true; tokens.len()];
        let mut seen: HashSet<String> = HashSet::new();

        for (index, token) in tokens.iter().enumerate().rev() {
            let parsed = parse(separator, token);

            // Group lookup first tries the base without the postfix modifier,
            // then falls back to the full utility name.
            let (group, has_postfix) = match self.registry.group_of(parsed.base) {
                Some(group) => (group, parsed.postfix.is_some()),
                None => match parsed.postfix.and_then(|_| self.registry.group_of(parsed.full)) {
                    Some(group) => (group, false),
                    None => {
                        // Unrecognized token: passes through unchanged
                        continue;
                    }
                },
            };

            let variant = modifier_key(&parsed.modifiers, separator);
            let marker = if parsed.important { "!" } else { "" };
            let conflict_key = format!("{}{}{}{}", variant, separator, marker, group);

            if !seen.insert(conflict_key) {
                kept[index] = false;
                continue;
            }

            for overridden in self.registry.conflicts_of(&group) {
                seen.insert(format!("{}{}{}{}", variant, separator, marker, overridden));
            }
            if has_postfix {
                for overridden in self.registry.postfix_conflicts_of(&group) {
                    seen.insert(format!("{}{}{}{}", variant, separator, marker, overridden));
                }
            }
        }

        let mut result = String::with_capacity(class_string.len());
        for (index, token) in tokens.iter().enumerate() {
            if kept[index] {
                if !result.is_empty() {
                    result.push(' ');
                }
                result.push_str(token);
            }
        }
        result
    }

    /// Flatten class values and merge the result
    pub fn merge_values(&self, values: &[ClassValue]) -> String {
        self.merge(&join_values(values))
    }
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::new()
    }
}
