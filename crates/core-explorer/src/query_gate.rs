//! Read-only policy for user supplied SQL.
//!
//! This is a prefix check, not a parser: a statement passes when, after
//! trimming whitespace, it starts with `SELECT` in any letter case. It does not
//! look inside the statement. The connection itself is opened read-only, which
//! is what actually prevents writes.

use crate::error::{ExplorerResult, SelectOnlySnafu};

const ALLOWED_PREFIX: &str = "SELECT";

#[must_use]
pub fn is_select(query: &str) -> bool {
    query
        .trim()
        .get(..ALLOWED_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ALLOWED_PREFIX))
}

pub fn ensure_select(query: &str) -> ExplorerResult<()> {
    if is_select(query) {
        Ok(())
    } else {
        SelectOnlySnafu { query }.fail()
    }
}
