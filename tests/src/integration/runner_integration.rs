//! # Runner Integration Flows
//!
//! Shard settings loaded through a config source and applied to a host
//! runner, including the empty-shard and missing-settings paths.

#[cfg(test)]
mod tests {
    use crate::fixtures::{class_identities, synthetic_class_names};
    use std::collections::HashMap;
    use tg_sharding::{
        add_grouping_filter, add_grouping_filter_from_source, Filterable, GroupFilter,
        ShardError, ShardSelectionApi, ShardSettings, TestIdentity, TestPlan, GROUPS_COUNT_KEY,
        GROUP_TO_EXECUTE_KEY,
    };
    use tg_telemetry::init_test_tracing;

    fn settings_source(count: &str, group: &str) -> HashMap<String, String> {
        HashMap::from([
            (GROUPS_COUNT_KEY.to_string(), count.to_string()),
            (GROUP_TO_EXECUTE_KEY.to_string(), group.to_string()),
        ])
    }

    /// Host runner that counts how many times it was filtered.
    #[derive(Default)]
    struct CountingRunner {
        plan: TestPlan,
        filter_calls: usize,
    }

    impl Filterable for CountingRunner {
        fn filter(&mut self, filter: &GroupFilter) -> Result<(), ShardError> {
            self.filter_calls += 1;
            self.plan.filter(filter)
        }
    }

    #[test]
    fn test_workers_together_run_every_test_once() {
        init_test_tracing();
        let identities = class_identities(&synthetic_class_names(500, 7));

        let mut seen: Vec<TestIdentity> = Vec::new();
        for group in 0..5 {
            let mut plan = TestPlan::new(identities.clone());
            let source = settings_source("5", &group.to_string());
            let applied =
                add_grouping_filter_from_source(&mut plan, &ShardSettings::default(), &source, true)
                    .unwrap();
            assert!(applied);
            seen.extend(plan.tests().iter().cloned());
        }

        assert_eq!(seen.len(), identities.len());
        for identity in &identities {
            assert_eq!(seen.iter().filter(|s| *s == identity).count(), 1);
        }
    }

    #[test]
    fn test_empty_shard_is_not_a_failure() {
        // Single class "a" (sum 97) lands in group 1 of 2; group 0 is empty.
        let mut runner = CountingRunner {
            plan: TestPlan::new(vec![TestIdentity::for_class("a")]),
            ..CountingRunner::default()
        };
        let source = settings_source("2", "0");

        let applied =
            add_grouping_filter_from_source(&mut runner, &ShardSettings::default(), &source, true)
                .unwrap();

        assert!(applied);
        assert_eq!(runner.filter_calls, 1);
        assert!(runner.plan.is_empty());
    }

    #[test]
    fn test_missing_settings_skip_or_fail() {
        let empty = HashMap::<String, String>::new();
        let mut runner = CountingRunner::default();

        let skipped =
            add_grouping_filter_from_source(&mut runner, &ShardSettings::default(), &empty, false)
                .unwrap();
        assert!(!skipped);
        assert_eq!(runner.filter_calls, 0);

        let err =
            add_grouping_filter_from_source(&mut runner, &ShardSettings::default(), &empty, true)
                .unwrap_err();
        assert!(err.to_string().contains(GROUPS_COUNT_KEY));
        assert!(err.to_string().contains(GROUP_TO_EXECUTE_KEY));
        assert_eq!(runner.filter_calls, 0);
    }

    #[test]
    fn test_invalid_settings_fail_before_filtering() {
        let mut runner = CountingRunner::default();
        for (count, group) in [("0", "0"), ("3", "-1"), ("3", "3"), ("x", "1")] {
            let err = add_grouping_filter_from_source(
                &mut runner,
                &ShardSettings::default(),
                &settings_source(count, group),
                false,
            )
            .unwrap_err();
            assert!(err.is_configuration_error(), "{} / {}: {}", count, group, err);
        }
        assert_eq!(runner.filter_calls, 0);
    }

    #[test]
    fn test_filter_shared_across_threads() {
        let filter = GroupFilter::new(3, 1).unwrap();
        let identities = class_identities(&synthetic_class_names(300, 11));
        let expected: Vec<bool> = identities.iter().map(|i| filter.should_run(i)).collect();

        let results: Vec<Vec<bool>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let filter = &filter;
                    let identities = &identities;
                    scope.spawn(move || {
                        identities.iter().map(|i| filter.should_run(i)).collect::<Vec<bool>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for result in results {
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_direct_filter_application() {
        let mut plan = TestPlan::new(vec![
            TestIdentity::for_method("ee", "testOne"),
            TestIdentity::for_method("ee", "testTwo"),
            TestIdentity::for_method("a", "testThree"),
        ]);
        add_grouping_filter(&mut plan, &GroupFilter::new(4, 2).unwrap()).unwrap();

        let methods: Vec<_> = plan.tests().iter().filter_map(|t| t.method_name()).collect();
        assert_eq!(methods, vec!["testOne", "testTwo"]);
    }
}
