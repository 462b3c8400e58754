//! Shared structural validation for amount-like cells
//!
//! Currency and counter columns share one shape: an optional leading symbol,
//! a decimal body and at most one trailing unit suffix. [`split_amount`]
//! checks that shape once so the column parsers only deal with scaling and
//! domain bounds.

use crate::constants::CURRENCY_SYMBOL;
use crate::models::RejectReason;
use std::ops::Bound;

/// Where the currency symbol may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SymbolPolicy {
    /// Cell must start with the symbol
    Required,
    /// Symbol may appear once, as the first character
    OptionalLeading,
    /// Column carries no symbol; the character gets no special treatment
    NotApplicable,
}

/// Structural rule for one column
#[derive(Debug, Clone, Copy)]
pub(crate) struct AmountRule {
    pub symbol: SymbolPolicy,
    /// Suffix letters accepted at the end of the body
    pub suffixes: &'static [char],
    pub reject_leading_minus: bool,
    /// Characters that reject the cell wherever they occur
    pub forbidden: &'static [char],
    pub max_decimal_points: Option<usize>,
}

/// Shape of a cell that passed structural validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmountShape<'a> {
    /// Nothing left after removing the symbol
    Empty,
    /// Body is a lone suffix letter
    BareSuffix(char),
    Amount {
        digits: &'a str,
        suffix: Option<char>,
    },
}

/// Validate symbol and suffix placement of an already trimmed, uppercased cell
pub(crate) fn split_amount<'a>(
    cell: &'a str,
    rule: &AmountRule,
) -> Result<AmountShape<'a>, RejectReason> {
    let body = match rule.symbol {
        SymbolPolicy::NotApplicable => cell,
        policy => {
            let symbols = cell.matches(CURRENCY_SYMBOL).count();
            if symbols > 1 {
                return Err(RejectReason::Structural);
            }
            if symbols == 1 && !cell.starts_with(CURRENCY_SYMBOL) {
                return Err(RejectReason::Structural);
            }
            if symbols == 0 && policy == SymbolPolicy::Required {
                return Err(RejectReason::Structural);
            }
            cell.strip_prefix(CURRENCY_SYMBOL).unwrap_or(cell).trim()
        }
    };

    if body.chars().any(|c| rule.forbidden.contains(&c)) {
        return Err(RejectReason::Structural);
    }

    if let Some(max_points) = rule.max_decimal_points {
        if body.matches('.').count() > max_points {
            return Err(RejectReason::Structural);
        }
    }

    if body.is_empty() {
        return Ok(AmountShape::Empty);
    }

    let mut chars = body.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        if rule.suffixes.contains(&only) {
            return Ok(AmountShape::BareSuffix(only));
        }
    }

    if rule.reject_leading_minus && body.starts_with('-') {
        return Err(RejectReason::Structural);
    }

    let (digits, suffix) = match body.chars().last() {
        Some(last) if rule.suffixes.contains(&last) => {
            (&body[..body.len() - last.len_utf8()], Some(last))
        }
        _ => (body, None),
    };

    // Any suffix letter left in the digits is misplaced or duplicated
    if digits.chars().any(|c| rule.suffixes.contains(&c)) {
        return Err(RejectReason::Structural);
    }

    Ok(AmountShape::Amount {
        digits: digits.trim(),
        suffix,
    })
}

/// Parse a decimal body; non-finite spellings such as `inf` or `nan` are rejected
pub(crate) fn parse_decimal(digits: &str) -> Result<f64, RejectReason> {
    match digits.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RejectReason::Parse),
    }
}

/// Check a value against a domain range
pub(crate) fn within(value: f64, lower: Bound<f64>, upper: Bound<f64>) -> Result<f64, RejectReason> {
    let above = match lower {
        Bound::Included(min) => value >= min,
        Bound::Excluded(min) => value > min,
        Bound::Unbounded => true,
    };
    let below = match upper {
        Bound::Included(max) => value <= max,
        Bound::Excluded(max) => value < max,
        Bound::Unbounded => true,
    };

    if above && below {
        Ok(value)
    } else {
        Err(RejectReason::Range)
    }
}
