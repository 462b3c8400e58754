//! Weekly wage parser
//!
//! Output is in thousands of euros. `€200K` is already in thousands; a
//! suffix-less amount such as `€500` is in euros and gets divided by 1000.

use super::structure::{AmountRule, AmountShape, SymbolPolicy, parse_decimal, split_amount, within};
use crate::config::DomainBounds;
use crate::constants::{THOUSAND, THOUSANDS_SUFFIX};
use crate::models::Normalized;
use std::ops::Bound;

const RULE: AmountRule = AmountRule {
    symbol: SymbolPolicy::OptionalLeading,
    suffixes: &[THOUSANDS_SUFFIX],
    reject_leading_minus: true,
    forbidden: &[],
    max_decimal_points: None,
};

/// Parse a wage cell into thousands of euros
///
/// Null cells are rejected: the wage column has no "no data" marker.
pub fn parse(raw: Option<&str>, bounds: &DomainBounds) -> Normalized {
    let Some(raw) = raw else {
        return Normalized::structural();
    };

    let cell = raw.trim().to_uppercase();

    let thousands = match split_amount(&cell, &RULE) {
        Ok(AmountShape::Empty) | Ok(AmountShape::BareSuffix(_)) => return Normalized::Blank,
        Ok(AmountShape::Amount { digits, suffix }) => match parse_decimal(digits) {
            Ok(amount) if suffix.is_some() => amount,
            Ok(amount) => amount / THOUSAND,
            Err(reason) => return Normalized::Rejected(reason),
        },
        Err(reason) => return Normalized::Rejected(reason),
    };

    match within(
        thousands,
        Bound::Unbounded,
        Bound::Included(bounds.wage_max_thousands),
    ) {
        Ok(value) => Normalized::Valid(value),
        Err(reason) => Normalized::Rejected(reason),
    }
}
