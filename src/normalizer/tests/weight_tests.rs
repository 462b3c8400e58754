//! Tests for weight normalization

use super::*;
use crate::models::RejectReason::{Parse, Range, Structural};

const W: Column = Column::Weight;

#[test]
fn test_weight_missing() {
    let bounds = DomainBounds::default();
    assert_eq!(W.parse(None, &bounds), Normalized::Missing);
    assert_eq!(parse(W, ""), Normalized::Missing);
    assert_eq!(parse(W, "   "), Normalized::Missing);
    assert_eq!(W.persisted_value(&Normalized::Missing), None);
}

#[test]
fn test_weight_bare_unit_is_blank() {
    assert_eq!(parse(W, "KG"), Normalized::Blank);
    assert_eq!(parse(W, " kg "), Normalized::Blank);
    assert_eq!(parse(W, "LBS"), Normalized::Blank);
    assert_eq!(parse(W, "lbs"), Normalized::Blank);
    assert_eq!(W.persisted_value(&Normalized::Blank), None);
    // a unit with an unreadable amount is still malformed
    assert_rejected(W, "kgkg", Parse);
    assert_rejected(W, "ibs", Structural);
}

#[test]
fn test_weight_kilograms() {
    assert_valid(W, "110kg", 110.0);
    assert_valid(W, " 75KG ", 75.0);
    assert_valid(W, "72.5kg", 72.5);
    assert_valid(W, "80 kg", 80.0);
}

#[test]
fn test_weight_pounds() {
    assert_valid(W, "159lbs", 159.0 / 2.20462);
    assert_valid(W, "200LBS", 200.0 / 2.20462);
}

#[test]
fn test_weight_boundaries() {
    assert_valid(W, "50kg", 50.0);
    assert_valid(W, "150kg", 150.0);
    assert_rejected(W, "49KG", Range);
    assert_rejected(W, "151KG", Range);
    assert_rejected(W, "100lbs", Range);
    assert_rejected(W, "340lbs", Range);
}

#[test]
fn test_weight_malformed() {
    assert_rejected(W, "kgkg", Parse);
    assert_rejected(W, "kg110", Structural);
    assert_rejected(W, "110", Structural);
    // Lookalike pound suffixes are not recognised
    assert_rejected(W, "159ibs", Structural);
    assert_rejected(W, "159lb", Structural);
    assert_rejected(W, "-80kg", Range);
}
