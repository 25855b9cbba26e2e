// Copyright (c) The testtree Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while serializing a [`TestReport`](crate::TestReport).
///
/// Returned by [`TestReport::serialize`](crate::TestReport::serialize).
#[derive(Debug, Error)]
#[error("error serializing test result tree")]
pub struct SerializeError {
    #[from]
    inner: std::io::Error,
}
