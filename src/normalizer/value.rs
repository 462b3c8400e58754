//! Market value parser
//!
//! Cells look like `€100M`, `€450K` or `€950`. The currency symbol is
//! mandatory here, unlike the wage and release clause columns, and the result
//! stays in euros.

use super::structure::{AmountRule, AmountShape, SymbolPolicy, parse_decimal, split_amount, within};
use crate::config::DomainBounds;
use crate::constants::{MILLION, MILLIONS_SUFFIX, THOUSAND, THOUSANDS_SUFFIX};
use crate::models::Normalized;
use std::ops::Bound;

const RULE: AmountRule = AmountRule {
    symbol: SymbolPolicy::Required,
    suffixes: &[MILLIONS_SUFFIX, THOUSANDS_SUFFIX],
    reject_leading_minus: false,
    forbidden: &[],
    max_decimal_points: None,
};

/// Zero-valued placeholders the export uses for "no valuation"
const ZERO_SENTINELS: &[&str] = &["€0K", "€0M"];

/// Parse a market value cell into euros
pub fn parse(raw: Option<&str>, bounds: &DomainBounds) -> Normalized {
    let Some(raw) = raw else {
        return Normalized::Missing;
    };

    let cell = raw.trim().to_uppercase();
    if cell.is_empty() {
        return Normalized::Missing;
    }

    if ZERO_SENTINELS.contains(&cell.as_str()) {
        return Normalized::out_of_range();
    }

    let (digits, multiplier) = match split_amount(&cell, &RULE) {
        Ok(AmountShape::Amount { digits, suffix }) => (digits, multiplier_for(suffix)),
        // A symbol with no amount, or a lone suffix, is malformed for this column
        Ok(AmountShape::Empty) | Ok(AmountShape::BareSuffix(_)) => {
            return Normalized::structural();
        }
        Err(reason) => return Normalized::Rejected(reason),
    };

    let scaled = match parse_decimal(digits) {
        Ok(base) => base * multiplier,
        Err(reason) => return Normalized::Rejected(reason),
    };

    match within(scaled, Bound::Included(0.0), Bound::Included(bounds.value_max)) {
        Ok(value) => Normalized::Valid(value),
        Err(reason) => Normalized::Rejected(reason),
    }
}

fn multiplier_for(suffix: Option<char>) -> f64 {
    match suffix {
        Some(MILLIONS_SUFFIX) => MILLION,
        Some(THOUSANDS_SUFFIX) => THOUSAND,
        _ => 1.0,
    }
}
