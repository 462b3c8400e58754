//! Hits (popularity counter) parser
//!
//! Counts are plain (`372`) or thousands-suffixed (`1.6K`). Time-like or
//! list-like garbage (`1:2`, `3;4`) is rejected outright.

use super::structure::{AmountRule, AmountShape, SymbolPolicy, parse_decimal, split_amount};
use crate::constants::{THOUSAND, THOUSANDS_SUFFIX};
use crate::models::Normalized;

const RULE: AmountRule = AmountRule {
    symbol: SymbolPolicy::NotApplicable,
    suffixes: &[THOUSANDS_SUFFIX],
    reject_leading_minus: true,
    forbidden: &[':', ';'],
    max_decimal_points: Some(1),
};

/// Parse a hits cell into a count
pub fn parse(raw: Option<&str>) -> Normalized {
    let Some(raw) = raw else {
        return Normalized::Missing;
    };

    let cell = raw.trim().to_uppercase();

    match split_amount(&cell, &RULE) {
        Ok(AmountShape::Empty) | Ok(AmountShape::BareSuffix(_)) => Normalized::Blank,
        Ok(AmountShape::Amount { digits, suffix }) => match parse_decimal(digits) {
            Ok(count) if suffix.is_some() => Normalized::Valid(count * THOUSAND),
            Ok(count) => Normalized::Valid(count),
            Err(reason) => Normalized::Rejected(reason),
        },
        Err(reason) => Normalized::Rejected(reason),
    }
}
