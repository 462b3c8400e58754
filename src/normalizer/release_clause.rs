//! Release clause parser
//!
//! Accepts `K` and `M` suffixes and reports euros. A well-formed amount with
//! no suffix carries no usable magnitude in the export and is recorded as
//! `0.0`.

use super::structure::{AmountRule, AmountShape, SymbolPolicy, parse_decimal, split_amount, within};
use crate::config::DomainBounds;
use crate::constants::{MILLION, MILLIONS_SUFFIX, THOUSAND, THOUSANDS_SUFFIX};
use crate::models::Normalized;
use std::ops::Bound;

const RULE: AmountRule = AmountRule {
    symbol: SymbolPolicy::OptionalLeading,
    suffixes: &[THOUSANDS_SUFFIX, MILLIONS_SUFFIX],
    reject_leading_minus: true,
    forbidden: &[],
    max_decimal_points: None,
};

/// Parse a release clause cell into euros
pub fn parse(raw: Option<&str>, bounds: &DomainBounds) -> Normalized {
    let Some(raw) = raw else {
        return Normalized::structural();
    };

    let cell = raw.trim().to_uppercase();

    let (digits, suffix) = match split_amount(&cell, &RULE) {
        Ok(AmountShape::Empty) | Ok(AmountShape::BareSuffix(_)) => return Normalized::Blank,
        Ok(AmountShape::Amount { digits, suffix }) => (digits, suffix),
        Err(reason) => return Normalized::Rejected(reason),
    };

    let amount = match parse_decimal(digits) {
        Ok(amount) => amount,
        Err(reason) => return Normalized::Rejected(reason),
    };

    let scaled = match suffix {
        Some(MILLIONS_SUFFIX) => amount * MILLION,
        Some(_) => amount * THOUSAND,
        None => return Normalized::Valid(0.0),
    };

    match within(
        scaled,
        Bound::Unbounded,
        Bound::Included(bounds.release_clause_max),
    ) {
        Ok(value) => Normalized::Valid(value),
        Err(reason) => Normalized::Rejected(reason),
    }
}
