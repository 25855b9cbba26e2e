// Copyright (c) The testtree Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render a [`TestReport`] as dotted-indentation text.

use crate::{SerializeError, TestNode, TestReport, TestStatus};
use std::{fmt, io};
use tracing::trace;

static TERMINATED_OUTPUT: &str = "Test terminated";

static TERMINATED_SUFFIX: &str = "[T]";
static PASSED_SUFFIX: &str = "(+)";
static IGNORED_SUFFIX: &str = "(~)";
static FAILED_SUFFIX: &str = "(-)";

pub(crate) fn serialize_report(
    report: &TestReport,
    mut writer: impl io::Write,
) -> Result<(), SerializeError> {
    trace!(name = report.name.as_str(), "serializing test result tree");
    write!(writer, "{report}")?;
    Ok(())
}

impl fmt::Display for TestReport {
    /// Renders the whole tree, one node per line.
    ///
    /// A node at depth `d` (root = 0) is rendered as `d` dots, its name, and
    /// a status suffix; children follow their parent in order. Lines are
    /// separated by `\n` with no trailing newline. If the root status is
    /// [`TestStatus::Terminated`] the output is the literal
    /// `Test terminated`, regardless of children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == TestStatus::Terminated {
            return f.write_str(TERMINATED_OUTPUT);
        }

        write!(f, "{}{}", self.name, status_suffix(self.status))?;
        for child in &self.children {
            write_node(child, 1, f)?;
        }
        Ok(())
    }
}

fn write_node(node: &TestNode, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Inside the curly braces:
    // * . is the fill character, < left-aligns.
    // * depth$ is the width to pad to.
    //
    // Padding an empty string produces `depth` leading dots.
    write!(f, "\n{:.<depth$}{}{}", "", node.name, status_suffix(node.status))?;
    for child in &node.children {
        write_node(child, depth + 1, f)?;
    }
    Ok(())
}

// Precedence: terminated > passed > ignored > failed.
fn status_suffix(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Terminated => TERMINATED_SUFFIX,
        TestStatus::Passed => PASSED_SUFFIX,
        TestStatus::Ignored => IGNORED_SUFFIX,
        TestStatus::Failed => FAILED_SUFFIX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn sandbox_report(root_status: TestStatus) -> TestReport {
        let mut sandbox = TestNode::new("sandbox", TestStatus::Failed);
        sandbox.add_child(TestNode::new("test_a", TestStatus::Failed));
        sandbox.add_child(TestNode::new("test_b", TestStatus::Passed));

        let mut report = TestReport::new("root", root_status);
        report.add_child(sandbox);
        report
    }

    #[test]
    fn renders_dotted_tree() {
        let report = sandbox_report(TestStatus::Failed);
        let expected = indoc! {"
            root(-)
            .sandbox(-)
            ..test_a(-)
            ..test_b(+)"
        };
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn terminated_root_short_circuits() {
        let report = sandbox_report(TestStatus::Terminated);
        assert_eq!(report.to_string(), "Test terminated");
    }

    #[test]
    fn terminated_node_below_root_renders_inline() {
        let mut report = TestReport::new("root", TestStatus::Failed);
        report.add_child(TestNode::new("hung_test", TestStatus::Terminated));
        let expected = indoc! {"
            root(-)
            .hung_test[T]"
        };
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn suffix_mapping() {
        let tests: &[(TestStatus, &str)] = &[
            (TestStatus::Terminated, "[T]"),
            (TestStatus::Passed, "(+)"),
            (TestStatus::Ignored, "(~)"),
            (TestStatus::Failed, "(-)"),
        ];
        for (status, suffix) in tests {
            assert_eq!(status_suffix(*status), *suffix, "for status {status:?}");
        }
    }

    #[test]
    fn single_node_report() {
        let report = TestReport::new("root", TestStatus::Passed);
        assert_eq!(report.to_string(), "root(+)");
    }

    #[test]
    fn deeper_nesting_and_ignored() {
        let mut inner = TestNode::new("inner", TestStatus::Passed);
        inner.add_child(TestNode::new("deep_test", TestStatus::Ignored));
        let mut outer = TestNode::new("outer", TestStatus::Passed);
        outer.add_child(inner);
        let mut report = TestReport::new("root", TestStatus::Passed);
        report.add_child(outer);

        let expected = indoc! {"
            root(+)
            .outer(+)
            ..inner(+)
            ...deep_test(~)"
        };
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn serialize_matches_display() {
        let report = sandbox_report(TestStatus::Failed);
        let mut buf: Vec<u8> = vec![];
        report.serialize(&mut buf).expect("serializing to a Vec succeeds");
        assert_eq!(String::from_utf8(buf).unwrap(), report.to_string());
    }

    #[test]
    fn no_trailing_newline() {
        let report = sandbox_report(TestStatus::Failed);
        assert!(!report.to_string().ends_with('\n'));
    }
}
