//! Suite Assembler
//!
//! Builds runners for the member classes of a root suite. Structural
//! validity and shard selection are separate passes; the shard pass only
//! runs when a filter is attached.

use crate::domain::{RunWith, ShardError, TestClass};
use crate::ports::inbound::ShardSelectionApi;
use crate::ports::outbound::{ClassDiscovery, RunnerBuilder};
use crate::service::GroupFilter;
use tracing::{debug, info};

/// Why a candidate class was left out of the suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Declared abstract.
    Abstract,
    /// Not publicly accessible.
    NonPublic,
    /// Annotated as a nested suite.
    NestedSuite,
    /// Runner override points back to suite machinery.
    SuiteRunner,
    /// Declares no test methods.
    NoTests,
    /// Belongs to another shard, or excluded from all shards.
    OtherShard,
}

/// Structural check for a candidate class.
///
/// Classes with a custom runner are always kept.
pub fn structural_rejection(class: &TestClass) -> Option<Rejection> {
    match &class.run_with {
        Some(RunWith::Custom(_)) => None,
        Some(RunWith::Suite) => Some(Rejection::SuiteRunner),
        None if class.is_abstract => Some(Rejection::Abstract),
        None if !class.is_public => Some(Rejection::NonPublic),
        None if class.is_nested_suite => Some(Rejection::NestedSuite),
        None if !class.has_test_methods => Some(Rejection::NoTests),
        None => None,
    }
}

/// Check if a candidate class can be run as a suite member.
pub fn is_structurally_valid(class: &TestClass) -> bool {
    structural_rejection(class).is_none()
}

/// Assembles the member runners of a root suite.
pub struct SuiteAssembler<D, B> {
    discovery: D,
    builder: B,
    filter: Option<GroupFilter>,
}

impl<D, B> SuiteAssembler<D, B>
where
    D: ClassDiscovery,
    B: RunnerBuilder,
{
    /// Create an assembler without shard selection.
    pub fn new(discovery: D, builder: B) -> Self {
        Self {
            discovery,
            builder,
            filter: None,
        }
    }

    /// Layer shard selection on top of structural filtering.
    pub fn with_filter(mut self, filter: GroupFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Attached shard filter, if any.
    pub fn filter(&self) -> Option<&GroupFilter> {
        self.filter.as_ref()
    }

    /// Why `class` would be left out, `None` when it is retained.
    pub fn rejection(&self, class: &TestClass) -> Option<Rejection> {
        structural_rejection(class).or_else(|| match &self.filter {
            Some(filter) if !filter.should_run(&class.identity()) => Some(Rejection::OtherShard),
            _ => None,
        })
    }

    /// Classes of `root_suite` that survive both passes, in discovery order.
    pub fn retained_classes(&self, root_suite: &str) -> Result<Vec<TestClass>, ShardError> {
        let candidates = self.discovery.candidate_classes(root_suite)?;
        let total = candidates.len();

        let retained: Vec<TestClass> = candidates
            .into_iter()
            .filter(|class| match self.rejection(class) {
                Some(reason) => {
                    debug!(class = %class.name, ?reason, "Skipping suite member");
                    false
                }
                None => true,
            })
            .collect();

        info!(
            root_suite,
            candidates = total,
            retained = retained.len(),
            shard = ?self.filter.as_ref().map(|f| f.describe()),
            "Assembled suite members"
        );
        Ok(retained)
    }

    /// Build runners for the retained members of `root_suite`.
    ///
    /// The runner builder is called exactly once, even when no class is
    /// retained.
    pub fn assemble(&self, root_suite: &str) -> Result<Vec<B::Runner>, ShardError> {
        let classes = self.retained_classes(root_suite)?;
        self.builder.runners(root_suite, &classes)
    }
}
