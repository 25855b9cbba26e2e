// Copyright (c) The testtree Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model and render hierarchical test results.
//!
//! A test run produces a rooted tree: group nodes (modules, suites) with
//! ordered children, and leaf nodes for individual tests. This crate owns the
//! data model for that tree along with two read-only queries over it:
//!
//! - rendering the tree as deterministic, dotted-indentation text suitable
//!   for golden-output comparison (see [`TestReport::serialize`] and the
//!   `Display` impl on [`TestReport`]);
//! - looking up a node by its fully qualified `::`-joined name (see
//!   [`TestReport::find_test`]).
//!
//! The tree itself is produced elsewhere, by whatever subsystem actually runs
//! the tests. Once handed over it is treated as a finished snapshot: nothing
//! in this crate mutates a populated tree.
//!
//! The [`ident`] module carries a small helper for Rust raw identifiers
//! (`r#match` and friends), used when test names contain reserved words.

mod errors;
pub mod ident;
mod report;
mod resolve;
mod serialize;

pub use errors::*;
pub use report::*;
