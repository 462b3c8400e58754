//! Application constants for the FIFA 21 normalizer
//!
//! This module contains the column names, unit tokens, default domain bounds
//! and status labels used throughout the normalization engine.

// =============================================================================
// Unit Tokens and Multipliers
// =============================================================================

/// Currency symbol carried by value, wage and release clause cells
pub const CURRENCY_SYMBOL: char = '€';

/// Thousands suffix
pub const THOUSANDS_SUFFIX: char = 'K';

/// Millions suffix
pub const MILLIONS_SUFFIX: char = 'M';

pub const THOUSAND: f64 = 1_000.0;
pub const MILLION: f64 = 1_000_000.0;

/// Centimetre suffix for height cells (matched after uppercasing)
pub const CENTIMETRE_SUFFIX: &str = "CM";

/// Kilogram suffix for weight cells
pub const KILOGRAM_SUFFIX: &str = "KG";

/// Pounds suffix for weight cells
pub const POUNDS_SUFFIX: &str = "LBS";

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// =============================================================================
// Default Domain Bounds
// =============================================================================

/// Highest accepted market value, in euros
pub const DEFAULT_VALUE_MAX: f64 = 200_000_000.0;

/// Highest accepted weekly wage, in thousands of euros
pub const DEFAULT_WAGE_MAX_THOUSANDS: f64 = 560.0;

/// Highest accepted release clause, in euros
pub const DEFAULT_RELEASE_CLAUSE_MAX: f64 = 203_100_000.0;

/// Height must be strictly greater than this (cm)
pub const DEFAULT_HEIGHT_MIN_EXCLUSIVE: f64 = 0.0;

/// Highest accepted height (cm)
pub const DEFAULT_HEIGHT_MAX: f64 = 220.0;

/// Lowest accepted weight (kg)
pub const DEFAULT_WEIGHT_MIN: f64 = 50.0;

/// Highest accepted weight (kg)
pub const DEFAULT_WEIGHT_MAX: f64 = 150.0;

/// Pounds in one kilogram
pub const DEFAULT_POUNDS_PER_KILOGRAM: f64 = 2.20462;

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names as they appear in the raw FIFA 21 export
pub mod columns {
    pub const VALUE: &str = "Value";
    pub const WAGE: &str = "Wage";
    pub const RELEASE_CLAUSE: &str = "Release Clause";
    pub const HEIGHT: &str = "Height";
    pub const WEIGHT: &str = "Weight";
    pub const HITS: &str = "Hits";

    // Renamed output columns
    pub const WAGES_THOUSANDS: &str = "Wages(€K)";
    pub const HEIGHT_CM: &str = "Height(cm)";
    pub const WEIGHT_KG: &str = "Weight(KG)";
}

/// Columns removed from the cleaned frame by default
pub const DEFAULT_DROP_COLUMNS: &[&str] = &["W/F", "SM", "IR", "Contract"];

/// Suffix appended to a normalized column name to form its outcome column
pub const DEFAULT_STATUS_SUFFIX: &str = "_status";

// =============================================================================
// Outcome Labels
// =============================================================================

/// Labels written into outcome columns
pub mod status {
    pub const VALID: &str = "valid";
    pub const BLANK: &str = "blank";
    pub const REJECTED: &str = "rejected";
    pub const MISSING: &str = "missing";
}

/// Token the CLI treats as a null cell
pub const NULL_TOKEN: &str = "<null>";

/// Maximum number of rejected samples kept per column for logging
pub const REJECT_SAMPLE_LIMIT: usize = 5;

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the outcome column name for a normalized column
pub fn status_column_name(column_name: &str, suffix: &str) -> String {
    format!("{}{}", column_name, suffix)
}

/// Round to two decimal places, half away from zero
pub fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
