//! Weight parser
//!
//! Accepts `72kg` and `159lbs`; pounds are converted to kilograms. A null or
//! empty cell is `Missing` rather than `Rejected`: absence of data is kept
//! apart from malformed data. A lone unit token carries no weight and is
//! `Blank`.

use super::structure::{parse_decimal, within};
use crate::config::DomainBounds;
use crate::constants::{KILOGRAM_SUFFIX, POUNDS_SUFFIX};
use crate::models::Normalized;
use std::ops::Bound;

/// Parse a weight cell into kilograms
pub fn parse(raw: Option<&str>, bounds: &DomainBounds) -> Normalized {
    let Some(raw) = raw else {
        return Normalized::Missing;
    };

    let cell = raw.trim().to_uppercase();
    if cell.is_empty() {
        return Normalized::Missing;
    }
    if cell == KILOGRAM_SUFFIX || cell == POUNDS_SUFFIX {
        return Normalized::Blank;
    }

    let kilograms = if let Some(digits) = cell.strip_suffix(KILOGRAM_SUFFIX) {
        parse_decimal(digits)
    } else if let Some(digits) = cell.strip_suffix(POUNDS_SUFFIX) {
        parse_decimal(digits).map(|pounds| pounds / bounds.pounds_per_kilogram)
    } else {
        return Normalized::structural();
    };

    let kilograms = match kilograms {
        Ok(value) => value,
        Err(reason) => return Normalized::Rejected(reason),
    };

    match within(
        kilograms,
        Bound::Included(bounds.weight_min),
        Bound::Included(bounds.weight_max),
    ) {
        Ok(value) => Normalized::Valid(value),
        Err(reason) => Normalized::Rejected(reason),
    }
}
