//! Height parser
//!
//! Three notations reach this column: `183cm`, a bare `183`, and imperial
//! `6'2` (optionally closed with `"`). Everything is reported in centimetres.

use super::structure::{parse_decimal, within};
use crate::config::DomainBounds;
use crate::constants::{CENTIMETRE_SUFFIX, CM_PER_INCH, INCHES_PER_FOOT, round_two_places};
use crate::models::Normalized;
use regex::Regex;
use std::ops::Bound;
use std::sync::LazyLock;

static FEET_INCHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\d+)'(\d+)"?$"#).expect("invalid feet/inches regex")
});

/// Parse a height cell into centimetres
pub fn parse(raw: Option<&str>, bounds: &DomainBounds) -> Normalized {
    let Some(raw) = raw else {
        return Normalized::Missing;
    };

    let cell = raw.trim().to_uppercase();
    if cell.is_empty() || cell == CENTIMETRE_SUFFIX {
        return Normalized::Blank;
    }

    if cell.contains('\'') {
        return parse_feet_inches(&cell);
    }

    let digits = if cell.contains(CENTIMETRE_SUFFIX) {
        if cell.matches(CENTIMETRE_SUFFIX).count() > 1
            || cell.starts_with(CENTIMETRE_SUFFIX)
            || !cell.ends_with(CENTIMETRE_SUFFIX)
        {
            return Normalized::structural();
        }
        cell.trim_end_matches(CENTIMETRE_SUFFIX)
    } else {
        cell.as_str()
    };

    let centimetres = match parse_decimal(digits) {
        Ok(value) => value,
        Err(reason) => return Normalized::Rejected(reason),
    };

    match within(
        centimetres,
        Bound::Excluded(bounds.height_min_exclusive),
        Bound::Included(bounds.height_max),
    ) {
        Ok(value) => Normalized::Valid(value),
        Err(reason) => Normalized::Rejected(reason),
    }
}

fn parse_feet_inches(cell: &str) -> Normalized {
    let Some(captures) = FEET_INCHES.captures(cell) else {
        return Normalized::structural();
    };

    let (Ok(feet), Ok(inches)) = (captures[1].parse::<f64>(), captures[2].parse::<f64>()) else {
        return Normalized::unparseable();
    };

    let total_inches = feet * INCHES_PER_FOOT + inches;
    Normalized::Valid(round_two_places(total_inches * CM_PER_INCH))
}
