// Copyright (c) The testtree Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escaping for Rust raw identifiers.
//!
//! Test names may contain reserved words (`match`, `type`, ...) that are only
//! valid Rust identifiers in their raw form (`r#match`). [`escape`] converts a
//! plain name to the form that is valid in source code, and [`unescape`]
//! recovers the plain name from a raw identifier.

use std::borrow::Cow;
use unicode_ident::{is_xid_continue, is_xid_start};

const RAW_PREFIX: &str = "r#";

/// Path and self-type keywords that cannot take the `r#` prefix: `r#self` and
/// friends are malformed Rust, so these are left unprefixed.
const UNESCAPABLE: &[&str] = &["self", "super", "crate", "Self"];

/// Strict and reserved keywords, which are invalid as plain identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Removes the `r#` prefix from a raw identifier, if present.
pub fn unescape(ident: &str) -> &str {
    ident.strip_prefix(RAW_PREFIX).unwrap_or(ident)
}

/// Prefixes an identifier with `r#` if it would otherwise be invalid as a
/// plain identifier.
///
/// `self`, `super`, `crate` and `Self` are returned unchanged even though
/// they fail plain-identifier validation: prefixing them would produce a
/// malformed raw identifier.
pub fn escape(ident: &str) -> Cow<'_, str> {
    if UNESCAPABLE.contains(&ident) || is_plain_ident(ident) {
        Cow::Borrowed(ident)
    } else {
        Cow::Owned(format!("{RAW_PREFIX}{ident}"))
    }
}

fn is_plain_ident(ident: &str) -> bool {
    if KEYWORDS.contains(&ident) {
        return false;
    }
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c == '_' || is_xid_start(c) => chars.all(is_xid_continue),
        _ => false,
    }
}
