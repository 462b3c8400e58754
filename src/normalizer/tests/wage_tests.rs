//! Tests for wage normalization

use super::*;
use crate::models::RejectReason::{Parse, Range, Structural};

const W: Column = Column::Wage;

#[test]
fn test_wages_boundaries() {
    assert_valid(W, "€0", 0.0);
    assert_valid(W, "€560K", 560.0);
    assert_rejected(W, "€561K", Range);
    assert_rejected(W, "€-100K", Structural);
    assert_rejected(W, "€100000k", Range);
    assert_valid(W, "€560000", 560.0);
    assert_rejected(W, "€560001", Range);
}

#[test]
fn test_wages_ordinary() {
    assert_valid(W, "€200K", 200.0);
    assert_valid(W, "€125K", 125.0);
    assert_valid(W, "€1K", 1.0);
    assert_valid(W, "€500", 0.5);
    assert_valid(W, "€1000", 1.0);
    assert_valid(W, "500", 0.5);
    assert_valid(W, "€12.5k", 12.5);
    assert_rejected(W, "€ABCK", Parse);
}

#[test]
fn test_wages_malformed() {
    assert_valid(W, "500K", 500.0);
    assert_rejected(W, "500€K", Structural);
    assert_rejected(W, "K€500", Structural);
    assert_rejected(W, "€€200K", Structural);
    assert_rejected(W, "€200KK", Structural);
    assert_rejected(W, "€K200", Structural);
    assert_rejected(W, "K200€", Structural);
    assert_rejected(W, "€2K0", Structural);
}

#[test]
fn test_wages_blank() {
    assert_eq!(parse(W, ""), Normalized::Blank);
    assert_eq!(parse(W, "   "), Normalized::Blank);
    assert_eq!(parse(W, "€"), Normalized::Blank);
    assert_eq!(parse(W, "€K"), Normalized::Blank);
    assert_eq!(parse(W, " € k "), Normalized::Blank);
}

#[test]
fn test_wages_null_is_rejected() {
    assert_eq!(
        W.parse(None, &DomainBounds::default()),
        Normalized::Rejected(Structural)
    );
}

#[test]
fn test_wages_extreme() {
    assert_valid(W, "€00000K", 0.0);
    assert_valid(W, "€0K", 0.0);
    assert_valid(W, "1K", 1.0);
    assert_valid(W, "€559K", 559.0);
    assert_rejected(W, "€NANK", Parse);
}
