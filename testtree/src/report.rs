// Copyright (c) The testtree Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::SerializeError, resolve::find_test, serialize::serialize_report};
use serde::{Deserialize, Serialize};
use std::{io, time::Duration};

/// The root of a test result tree.
///
/// A `TestReport` is the distinguished top of the hierarchy: it carries the
/// overall run status, aggregate counters, and the top-level [`TestNode`]s.
/// The root's own name (conventionally `root`) is not part of any qualified
/// name; lookups start from its direct children.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestReport {
    /// The name of this report, conventionally `root`.
    pub name: String,

    /// The overall status of the run.
    ///
    /// [`TestStatus::Terminated`] here means the run was interrupted before
    /// completion; rendering short-circuits on it regardless of children.
    pub status: TestStatus,

    /// The overall time taken by the run, if known.
    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,

    /// The total number of leaf tests in this report.
    pub tests: usize,

    /// The total number of leaf tests that failed.
    pub failures: usize,

    /// The total number of leaf tests that were ignored.
    pub ignored: usize,

    /// The top-level nodes of the tree, in discovery/execution order.
    pub children: Vec<TestNode>,
}

impl TestReport {
    /// Creates a new `TestReport` with the given name and status.
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            name: name.into(),
            status,
            duration: None,
            tests: 0,
            failures: 0,
            ignored: 0,
            children: vec![],
        }
    }

    /// Adds a top-level node and updates the `tests`, `failures` and
    /// `ignored` counters, plus the aggregate duration.
    ///
    /// When assembling a report, use of this method is recommended over
    /// pushing to `self.children` directly.
    pub fn add_child(&mut self, child: TestNode) -> &mut Self {
        let counts = child.leaf_counts();
        self.tests += counts.tests;
        self.failures += counts.failures;
        self.ignored += counts.ignored;
        if let Some(duration) = child.duration {
            *self.duration.get_or_insert(Duration::ZERO) += duration;
        }
        self.children.push(child);
        self
    }

    /// Adds several top-level nodes and updates the counters.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = TestNode>) -> &mut Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Looks up a node by its fully qualified `::`-joined name.
    ///
    /// The root's own name is excluded from qualified names: `a::b` refers to
    /// the node `b` under the top-level node `a`. The search is a pre-order
    /// depth-first walk over the children; the first match wins even if the
    /// same qualified name occurs again later in the tree.
    ///
    /// Returns `None` if no node matches.
    pub fn find_test(&self, qualified: &str) -> Option<&TestNode> {
        find_test(self, qualified)
    }

    /// Renders this report's tree to the given writer.
    ///
    /// The output is the same dotted-indentation text produced by the
    /// `Display` impl, with no trailing newline.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_report(self, writer)
    }
}

/// A single node in a test result tree: either a leaf test or a group
/// (module/suite) with children.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestNode {
    /// The name of this node. Unique among siblings, not globally unique.
    pub name: String,

    /// The status of this node.
    ///
    /// Group nodes carry whatever status the producing subsystem assigned;
    /// no status is derived from children here.
    pub status: TestStatus,

    /// Elapsed time for this node.
    ///
    /// Present for leaf tests with timing data, and for groups where it is
    /// the sum of descendant leaf durations ([`add_child`](Self::add_child)
    /// maintains the sum).
    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,

    /// Child nodes, in discovery/execution order. Never sorted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TestNode>,
}

impl TestNode {
    /// Creates a new `TestNode` with the given name and status.
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            name: name.into(),
            status,
            duration: None,
            children: vec![],
        }
    }

    /// Sets the elapsed time for this node.
    pub fn set_duration(&mut self, duration: Duration) -> &mut Self {
        self.duration = Some(duration);
        self
    }

    /// Adds a child node, folding its duration into this node's aggregate.
    ///
    /// When assembling a tree, use of this method is recommended over pushing
    /// to `self.children` directly: it keeps a group's duration equal to the
    /// sum of its children's durations.
    pub fn add_child(&mut self, child: TestNode) -> &mut Self {
        if let Some(duration) = child.duration {
            *self.duration.get_or_insert(Duration::ZERO) += duration;
        }
        self.children.push(child);
        self
    }

    /// Adds several child nodes, folding their durations into the aggregate.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = TestNode>) -> &mut Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Returns true if this node is a leaf test (no children).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn leaf_counts(&self) -> LeafCounts {
        let mut counts = LeafCounts::default();
        self.tally(&mut counts);
        counts
    }

    fn tally(&self, counts: &mut LeafCounts) {
        if self.is_leaf() {
            counts.tests += 1;
            match self.status {
                TestStatus::Failed => counts.failures += 1,
                TestStatus::Ignored => counts.ignored += 1,
                TestStatus::Passed | TestStatus::Terminated => {}
            }
        } else {
            for child in &self.children {
                child.tally(counts);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LeafCounts {
    pub(crate) tests: usize,
    pub(crate) failures: usize,
    pub(crate) ignored: usize,
}

/// The outcome of a test or test group.
///
/// The variants are mutually exclusive and terminal for a completed run.
/// `Terminated` means the run was aborted mid-execution and overrides every
/// other classification when rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestStatus {
    /// The test passed.
    Passed,

    /// The test failed.
    Failed,

    /// The test was not run.
    Ignored,

    /// The run was interrupted before this test completed.
    Terminated,
}
