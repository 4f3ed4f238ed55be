//! Property-based tests for declaration merging.
//!
//! These tests use proptest to generate random declaration lists and
//! verify that the merge invariants hold for all inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::manifest::{RepositoryConfig, VcsSpec};
    use crate::merge::merge;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    /// A declaration over a small path universe so collisions are common.
    fn arb_config() -> impl Strategy<Value = RepositoryConfig> {
        ("[a-e]", 0i64..10, "[a-z]{1,8}").prop_map(|(path, version, url)| RepositoryConfig {
            url,
            target_path: PathBuf::from(format!("/repos/{}", path)),
            version,
            vcs: VcsSpec::Git {
                remote: "origin".to_string(),
                branch: "master".to_string(),
            },
        })
    }

    proptest! {
        /// Property: exactly one survivor per distinct target path
        #[test]
        fn merge_yields_one_survivor_per_path(configs in prop::collection::vec(arb_config(), 0..40)) {
            let distinct: HashSet<_> = configs.iter().map(|c| c.target_path.clone()).collect();
            let merged = merge(configs);

            prop_assert_eq!(merged.len(), distinct.len());
            let survivors: HashSet<_> = merged.iter().map(|c| c.target_path.clone()).collect();
            prop_assert_eq!(survivors, distinct);
        }

        /// Property: the survivor carries the maximum version of its group
        #[test]
        fn merge_survivor_has_group_max_version(configs in prop::collection::vec(arb_config(), 1..40)) {
            let merged = merge(configs.clone());

            for survivor in &merged {
                let group_max = configs
                    .iter()
                    .filter(|c| c.target_path == survivor.target_path)
                    .map(|c| c.version)
                    .max()
                    .unwrap();
                prop_assert_eq!(survivor.version, group_max);
            }
        }

        /// Property: at equal max version, the later declaration survives
        #[test]
        fn merge_equal_version_keeps_latest(configs in prop::collection::vec(arb_config(), 1..40)) {
            let merged = merge(configs.clone());

            for survivor in &merged {
                let latest_of_max = configs
                    .iter()
                    .filter(|c| c.target_path == survivor.target_path)
                    .filter(|c| c.version == survivor.version)
                    .next_back()
                    .unwrap();
                prop_assert_eq!(&survivor.url, &latest_of_max.url);
            }
        }

        /// Property: merging is idempotent
        #[test]
        fn merge_is_idempotent(configs in prop::collection::vec(arb_config(), 0..40)) {
            let once = merge(configs);
            let twice = merge(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Property: output order is first-occurrence order of distinct paths
        #[test]
        fn merge_preserves_first_occurrence_order(configs in prop::collection::vec(arb_config(), 0..40)) {
            let mut seen = HashSet::new();
            let expected_order: Vec<PathBuf> = configs
                .iter()
                .filter(|c| seen.insert(c.target_path.clone()))
                .map(|c| c.target_path.clone())
                .collect();

            let merged = merge(configs);
            let actual_order: Vec<PathBuf> =
                merged.iter().map(|c| c.target_path.clone()).collect();
            prop_assert_eq!(actual_order, expected_order);
        }
    }
}
