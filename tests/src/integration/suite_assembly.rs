//! # Suite Assembly Flows
//!
//! Structural filtering composed with shard selection, end to end through
//! discovery and runner construction doubles.

#[cfg(test)]
mod tests {
    use crate::fixtures::{CapturingRunnerBuilder, StaticDiscovery};
    use std::sync::Arc;
    use tg_sharding::{
        AnnotationHashingStrategy, FnHashingStrategy, GroupAssignment, GroupFilter, RunWith,
        ShardConfig, SuiteAssembler, TestClass, TestIdentity,
    };
    use tg_telemetry::init_test_tracing;

    const SUITE: &str = "inputs.SuiteToTest";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Sentinel strategy: skip one class everywhere, everything else to group 0.
    fn skipping_strategy() -> GroupFilter {
        let strategy = FnHashingStrategy::new(|id: &TestIdentity| {
            if id.class_name().contains("TestClassWithTestMethodToSkip") {
                GroupAssignment::Excluded
            } else {
                GroupAssignment::Group(0)
            }
        });
        GroupFilter::with_strategy(ShardConfig::single(), Arc::new(strategy))
    }

    fn suite_members() -> Vec<TestClass> {
        vec![
            TestClass::new("inputs.NoneAbstractTestClassWithTestMethod").abstract_class(),
            TestClass::new("inputs.NonePackageTestClassWithTestMethod").non_public(),
            TestClass::new("inputs.NoneTestClassWithSuiteAnnotation").nested_suite(),
            TestClass::new("inputs.TestClassWithTestMethodToSkip"),
            TestClass::new("inputs.TestClassWithTestMethod"),
            TestClass::new("inputs.TestClassWithRunnerAnnotation")
                .without_tests()
                .run_with(RunWith::Custom("inputs.CustomRunner".to_string())),
        ]
    }

    fn assembled_names(members: Vec<TestClass>, filter: Option<GroupFilter>) -> Vec<String> {
        let builder = CapturingRunnerBuilder::default();
        let mut assembler = SuiteAssembler::new(StaticDiscovery::new(members), &builder);
        if let Some(filter) = filter {
            assembler = assembler.with_filter(filter);
        }
        assembler.assemble(SUITE).unwrap();
        builder.single_call_names()
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_exactly_two_classes_reach_runner_builder() {
        init_test_tracing();
        let names = assembled_names(suite_members(), Some(skipping_strategy()));
        assert_eq!(
            names,
            vec![
                "inputs.TestClassWithTestMethod".to_string(),
                "inputs.TestClassWithRunnerAnnotation".to_string(),
            ]
        );
    }

    #[test]
    fn test_does_not_include_abstract_classes() {
        let names = assembled_names(suite_members(), Some(skipping_strategy()));
        assert!(!names.iter().any(|n| n.contains("NoneAbstractTestClassWithTestMethod")));
    }

    #[test]
    fn test_does_not_include_non_public_classes() {
        let names = assembled_names(suite_members(), Some(skipping_strategy()));
        assert!(!names.iter().any(|n| n.contains("NonePackageTestClassWithTestMethod")));
    }

    #[test]
    fn test_does_not_include_suite_annotated_classes() {
        let mut members = suite_members();
        members.push(TestClass::new("inputs.NestedRunner").run_with(RunWith::Suite));
        let names = assembled_names(members, Some(skipping_strategy()));
        assert!(!names.iter().any(|n| n.contains("NoneTestClassWithSuiteAnnotation")));
        assert!(!names.iter().any(|n| n.contains("NestedRunner")));
    }

    #[test]
    fn test_does_not_include_classes_without_tests() {
        let mut members = suite_members();
        members.push(TestClass::new("inputs.NoneTestClassWithoutAnyAnnotations").without_tests());
        let names = assembled_names(members, Some(skipping_strategy()));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_skips_sentinel_excluded_classes() {
        let names = assembled_names(suite_members(), Some(skipping_strategy()));
        assert!(!names.iter().any(|n| n.contains("ToSkip")));
    }

    #[test]
    fn test_structural_pass_is_independent_of_sharding() {
        // Without a filter the sentinel class survives; only structure is checked.
        let names = assembled_names(suite_members(), None);
        assert_eq!(names.len(), 3);
        assert!(names.iter().any(|n| n.contains("ToSkip")));
    }

    #[test]
    fn test_marker_sharding_splits_suite() {
        let members = vec![
            TestClass::new("inputs.SlowA").with_markers(["Slow"]),
            TestClass::new("inputs.NetB").with_markers(["Network"]),
            TestClass::new("inputs.PlainC"),
            TestClass::new("inputs.SlowAbstract").with_markers(["Slow"]).abstract_class(),
        ];
        let strategy = Arc::new(AnnotationHashingStrategy::new(["Slow", "Network"]));
        let group_count = strategy.group_count() as i32;

        let per_shard: Vec<Vec<String>> = (0..group_count)
            .map(|group| {
                let config = ShardConfig::new(group_count, group).unwrap();
                let filter = GroupFilter::with_strategy(config, strategy.clone());
                assembled_names(members.clone(), Some(filter))
            })
            .collect();

        assert_eq!(per_shard[0], vec!["inputs.SlowA".to_string()]);
        assert_eq!(per_shard[1], vec!["inputs.NetB".to_string()]);
        assert_eq!(per_shard[2], vec!["inputs.PlainC".to_string()]);
    }
}
