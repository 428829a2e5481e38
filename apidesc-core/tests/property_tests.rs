//! Property-based tests for the optimizer

use std::path::Path;

use apidesc_core::{FieldType, Optimizer, RuleSet};
use indexmap::IndexMap;
use proptest::prelude::*;

fn plain_optimizer() -> Optimizer {
    Optimizer::from_rules("pt-BR", RuleSet::default()).unwrap()
}

fn shipped_optimizer() -> Optimizer {
    let rules_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../rules");
    Optimizer::new("pt-BR", &rules_dir).unwrap()
}

/// Dictionary keys with every classified suffix plus unclassified ones
fn key_strategy() -> impl Strategy<Value = String> {
    (
        "[a-z][a-zA-Z_]{0,10}",
        prop_oneof![
            Just("id.description"),
            Just("name.description"),
            Just("status.description"),
            Just("list.description"),
            Just("get-ok.description"),
            Just("createdAt.description"),
            Just("title"),
        ],
    )
        .prop_map(|(entity, suffix)| format!("api.v1.{entity}.{suffix}"))
}

proptest! {
    #[test]
    fn normalization_is_idempotent_without_rules(text in "\\PC{0,64}") {
        let optimizer = plain_optimizer();
        let once = optimizer.normalize(&text);
        let twice = optimizer.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_text_is_finished(text in "[a-zA-Zà-ú ,.;:!?\\t\\n]{0,64}") {
        let normalized = plain_optimizer().normalize(&text);
        if !normalized.is_empty() {
            prop_assert!(normalized.ends_with(['.', '!', '?', ':']));
            prop_assert!(!normalized.contains(".."));
            prop_assert!(!normalized.contains("  "));
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }
    }

    #[test]
    fn mapping_keeps_keys_and_counts(
        entries in prop::collection::vec((key_strategy(), "[a-zA-Z ]{0,30}"), 0..20)
    ) {
        let optimizer = shipped_optimizer();
        let input: IndexMap<String, String> = entries.into_iter().collect();
        let (output, stats) = optimizer.optimize_mapping(&input);

        prop_assert_eq!(stats.total, input.len());
        prop_assert!(stats.optimized <= stats.total);
        prop_assert!(output.keys().eq(input.keys()));
        for (key, value) in &input {
            if value.is_empty() {
                prop_assert_eq!(&output[key], "");
            }
        }
    }

    #[test]
    fn classification_ignores_case(key in key_strategy()) {
        prop_assert_eq!(FieldType::classify(&key), FieldType::classify(&key.to_uppercase()));
    }
}
