//! In-Memory Test Plan
//!
//! Implements `Filterable` over a plain list of test identities, for hosts
//! that already hold their discovered tests.

use crate::domain::{ShardError, TestIdentity};
use crate::ports::inbound::ShardSelectionApi;
use crate::ports::outbound::Filterable;
use crate::service::GroupFilter;
use tracing::debug;

/// Ordered list of tests to execute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestPlan {
    tests: Vec<TestIdentity>,
}

impl TestPlan {
    /// Create a plan from discovered tests.
    pub fn new(tests: Vec<TestIdentity>) -> Self {
        Self { tests }
    }

    /// Tests still in the plan.
    pub fn tests(&self) -> &[TestIdentity] {
        &self.tests
    }

    /// Number of tests still in the plan.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Check if the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl FromIterator<TestIdentity> for TestPlan {
    fn from_iter<I: IntoIterator<Item = TestIdentity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Filterable for TestPlan {
    fn filter(&mut self, filter: &GroupFilter) -> Result<(), ShardError> {
        let before = self.tests.len();
        self.tests.retain(|test| filter.should_run(test));
        debug!(
            before,
            after = self.tests.len(),
            filter = %filter.describe(),
            "Filtered test plan"
        );

        if self.tests.is_empty() {
            return Err(ShardError::NoTestsRemain);
        }
        Ok(())
    }
}
