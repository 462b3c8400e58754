//! Tests for the per-column parsers
//!
//! Shared helpers live here; each parser has its own test file.

use crate::config::DomainBounds;
use crate::models::{Column, Normalized, RejectReason};

mod release_clause_tests;
mod wage_tests;
mod weight_tests;

/// Parse a present cell with default bounds
pub fn parse(column: Column, raw: &str) -> Normalized {
    column.parse(Some(raw), &DomainBounds::default())
}

/// Assert a cell is rejected for the given reason
#[track_caller]
pub fn assert_rejected(column: Column, raw: &str, reason: RejectReason) {
    assert_eq!(
        parse(column, raw),
        Normalized::Rejected(reason),
        "{} cell {:?}",
        column,
        raw
    );
}

/// Assert a cell parses to the given value
#[track_caller]
pub fn assert_valid(column: Column, raw: &str, expected: f64) {
    assert_eq!(
        parse(column, raw),
        Normalized::Valid(expected),
        "{} cell {:?}",
        column,
        raw
    );
}
