use std::io::Write;
use tailwind_merger::{merge, merge_classes, run_merge, ClassMerger, ClassValue, MergeArgs};
use tempfile::NamedTempFile;

#[test]
fn test_merge_no_values_returns_empty_string() {
    assert_eq!(merge(&[]), "");
}

#[test]
fn test_merge_drops_falsy_entries() {
    let values = [
        ClassValue::from("a"),
        ClassValue::from(false),
        ClassValue::from("b"),
    ];
    assert_eq!(merge(&values), "a b");
}

#[test]
fn test_later_conflicting_utility_wins() {
    let values = [ClassValue::from("p-2"), ClassValue::from("p-4")];
    assert_eq!(merge(&values), "p-4");
}

#[test]
fn test_map_value_keeps_only_true_entries() {
    let values = [ClassValue::Map(vec![
        ("a".to_string(), true),
        ("b".to_string(), false),
    ])];
    assert_eq!(merge(&values), "a");
}

#[test]
fn test_no_duplicate_group_entries_in_output() {
    let merged = merge_classes("p-2 hover:p-1 p-4 m-2 p-8 hover:p-3");
    let padding_tokens: Vec<&str> = merged
        .split_whitespace()
        .filter(|t| t.ends_with("p-1") || *t == "p-2" || *t == "p-4" || *t == "p-8" || t.ends_with("p-3"))
        .collect();
    // One plain padding and one hover padding survive
    assert_eq!(padding_tokens, vec!["p-8", "hover:p-3"]);
    assert_eq!(merged, "m-2 p-8 hover:p-3");
}

#[test]
fn test_relative_order_of_survivors_is_preserved() {
    assert_eq!(
        merge_classes("flex custom-a p-2 custom-b p-4"),
        "flex custom-a custom-b p-4"
    );
}

#[test]
fn test_unrecognized_tokens_pass_through_unchanged() {
    assert_eq!(
        merge_classes("totally!weird p-2 totally!weird"),
        "totally!weird p-2 totally!weird"
    );
}

#[test]
fn test_idempotence_on_resolved_strings() {
    let inputs = [
        "p-2 p-4",
        "custom p-2 hover:bg-red-500 hover:bg-blue-500",
        "md:flex md:grid text-lg text-red-500 text-blue-500",
        "w-full w-1/2 -mt-2 mt-4 [color:red] [color:blue]",
    ];
    for input in inputs {
        let once = merge_classes(input);
        let twice = merge_classes(&once);
        assert_eq!(twice, once, "re-merge changed output for {}", input);
    }
}

#[test]
fn test_variants_and_important_are_separate_scopes() {
    assert_eq!(merge_classes("p-2 hover:p-2 !p-2"), "p-2 hover:p-2 !p-2");
    assert_eq!(merge_classes("!p-2 !p-4"), "!p-4");
    assert_eq!(merge_classes("hover:focus:p-2 focus:hover:p-4"), "focus:hover:p-4");
}

#[test]
fn test_run_merge_joins_arguments_in_order() {
    let args = MergeArgs {
        classes: vec!["p-2 bg-red-500".to_string(), "p-4".to_string()],
        config: None,
        verbose: false,
    };
    let merged = run_merge(args).unwrap();
    assert_eq!(merged, "bg-red-500 p-4");
}

#[test]
fn test_run_merge_rejects_blank_input() {
    let args = MergeArgs {
        classes: vec!["   ".to_string()],
        config: None,
        verbose: false,
    };
    assert!(run_merge(args).is_err());
}

#[test]
fn test_run_merge_with_config_file() {
    let yaml_content = r##"
extend:
  groups:
    btn:
      - "btn-*"
  conflicts:
    btn:
      - "p"
"##;

    let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
    file.write_all(yaml_content.as_bytes()).unwrap();

    let args = MergeArgs {
        classes: vec!["p-2 btn-primary btn-secondary".to_string()],
        config: Some(file.path().to_path_buf()),
        verbose: false,
    };
    let merged = run_merge(args).unwrap();
    // btn-secondary wins its own group and overrides the padding
    assert_eq!(merged, "btn-secondary");
}

#[test]
fn test_run_merge_with_missing_config_file() {
    let args = MergeArgs {
        classes: vec!["p-2".to_string()],
        config: Some("does-not-exist.yaml".into()),
        verbose: false,
    };
    assert!(run_merge(args).is_err());
}

#[test]
fn test_default_merger_handles_common_component_patterns() {
    // Base classes overridden by caller-supplied ones, the common cn() pattern
    let base = "inline-flex items-center rounded-md bg-gray-100 px-3 py-1 text-sm";
    let overrides = "bg-blue-500 text-white px-4";
    assert_eq!(
        merge_classes(&format!("{} {}", base, overrides)),
        "inline-flex items-center rounded-md py-1 text-sm bg-blue-500 text-white px-4"
    );
}

#[test]
fn test_shared_merger_is_deterministic() {
    let merger = ClassMerger::new();
    let input = "p-2 p-4 hover:m-1 hover:m-2 custom";
    let first = merger.merge(input);
    for _ in 0..10 {
        assert_eq!(merger.merge(input), first);
    }
}
