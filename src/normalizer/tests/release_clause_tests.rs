//! Tests for release clause normalization

use super::*;
use crate::models::RejectReason::{Parse, Range, Structural};

const R: Column = Column::ReleaseClause;

#[test]
fn test_clause_boundaries() {
    assert_valid(R, "€0", 0.0);
    assert_valid(R, "€203.1M", 203_100_000.0);
    assert_rejected(R, "€-1M", Structural);
    assert_rejected(R, "€500M", Range);
    assert_rejected(R, "€203200K", Range);
}

#[test]
fn test_clause_ordinary() {
    assert_valid(R, "€138.4M", 138_400_000.0);
    assert_valid(R, "€20.1M", 20_100_000.0);
    assert_valid(R, "€71K", 71_000.0);
    assert_valid(R, "€1.2m", 1_200_000.0);
}

#[test]
fn test_clause_malformed() {
    assert_valid(R, "138.4M", 138_400_000.0);
    assert_rejected(R, "138.4€M", Structural);
    assert_rejected(R, "€M138.4", Structural);
    assert_rejected(R, "138.4€€", Structural);
    assert_rejected(R, "€€138.4K", Structural);
    assert_rejected(R, "€138.4MM", Structural);
    assert_rejected(R, "M138.4K", Structural);
    assert_rejected(R, "€138.4KM", Structural);
    assert_rejected(R, "€ABCM", Parse);
}

#[test]
fn test_clause_blank() {
    assert_eq!(parse(R, ""), Normalized::Blank);
    assert_eq!(parse(R, "   "), Normalized::Blank);
    assert_eq!(parse(R, "€"), Normalized::Blank);
    assert_eq!(parse(R, "€K"), Normalized::Blank);
    assert_eq!(parse(R, "€M"), Normalized::Blank);
}

#[test]
fn test_clause_without_suffix_records_zero() {
    assert_valid(R, "€00000", 0.0);
    assert_valid(R, "€950", 0.0);
    assert_valid(R, "138.4", 0.0);
    assert_rejected(R, "€abc", Parse);
}

#[test]
fn test_clause_extreme() {
    assert_valid(R, "€0M", 0.0);
    assert_valid(R, "€0K", 0.0);
    assert_valid(R, "€203M", 203_000_000.0);
    assert_eq!(
        R.parse(None, &DomainBounds::default()),
        Normalized::Rejected(Structural)
    );
}
