// Copyright (c) The testtree Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Look up nodes by fully qualified name.

use crate::{TestNode, TestReport};
use tracing::debug;

pub(crate) fn find_test<'a>(report: &'a TestReport, qualified: &str) -> Option<&'a TestNode> {
    if qualified.is_empty() {
        return None;
    }
    let components: Vec<&str> = qualified.split("::").collect();
    if components.iter().any(|component| component.is_empty()) {
        return None;
    }

    let found = find_in(&report.children, &components);
    if found.is_none() {
        debug!(qualified, "test not found in result tree");
    }
    found
}

// Pre-order search with backtracking: a sibling whose name matches the head
// component is explored fully before any later sibling is considered. Sibling
// names are expected to be unique, but duplicates are tolerated and resolve to
// the first match in pre-order.
fn find_in<'a>(nodes: &'a [TestNode], components: &[&str]) -> Option<&'a TestNode> {
    let (head, rest) = components.split_first()?;
    for node in nodes {
        if node.name != *head {
            continue;
        }
        if rest.is_empty() {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, rest) {
            return Some(found);
        }
        // Subtree exhausted without a match; keep scanning later siblings.
    }
    None
}
