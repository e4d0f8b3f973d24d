//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, HostConfig, OutputFormat};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]
}

fn drive_path_strategy() -> impl Strategy<Value = String> {
    ("[A-Z]", "[a-z0-9]{1,8}").prop_map(|(drive, dir)| format!(r"{drive}:\{dir}"))
}

fn short_names_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(drive_path_strategy(), drive_path_strategy(), 0..5)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(output_format_strategy()),
        prop::option::of(drive_path_strategy()),
        prop::option::of(short_names_strategy()),
    )
        .prop_map(|(output_format, current_dir, short_names)| Config {
            output_format,
            host: Some(HostConfig {
                current_dir,
                short_names,
            }),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Set values from the higher-precedence source win, unset ones fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(
            result.current_dir(),
            high.current_dir().or(low.current_dir())
        );
    }

    // Short names from both sources survive a merge
    #[test]
    fn config_merge_accumulates_short_names(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let merged = result.short_names().cloned().unwrap_or_default();
        for (long, short) in high.short_names().into_iter().flatten() {
            prop_assert_eq!(merged.get(long), Some(short));
        }
        for long in low.short_names().into_iter().flatten().map(|(long, _)| long) {
            prop_assert!(merged.contains_key(long));
        }
    }

    // Merging with an empty config changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }
}
