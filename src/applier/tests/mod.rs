//! Tests for the column applier
//!
//! Frames here mimic a slice of the raw FIFA 21 export.

use polars::prelude::*;

mod apply_tests;

/// A small raw frame with all six columns plus droppable extras
pub fn create_raw_frame() -> DataFrame {
    df!(
        "Name" => &["L. Messi", "K. De Bruyne", "Unknown", "Bad Row"],
        "Value" => &[Some("€67.5M"), Some("€87M"), None, Some("€0K")],
        "Wage" => &[Some("€560K"), Some("€370K"), Some(""), Some("€561K")],
        "Release Clause" => &[Some("€138.4M"), Some("€161M"), Some("€"), Some("€M138.4")],
        "Height" => &[Some("5'7\""), Some("181cm"), None, Some("cm100")],
        "Weight" => &[Some("72kg"), Some("154lbs"), Some(""), Some("49kg")],
        "Hits" => &[Some("771"), Some("1.2K"), None, Some("1:2")],
        "W/F" => &["4 ★", "5 ★", "3 ★", "2 ★"],
        "SM" => &["4★", "4★", "2★", "1★"],
        "IR" => &["5 ★", "4 ★", "1 ★", "1 ★"],
        "Contract" => &["2004 ~ 2021", "2015 ~ 2023", "", ""]
    )
    .unwrap()
}

/// Read a float column as a vector
pub fn floats(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Read a string column as a vector
pub fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|s| s.map(str::to_string))
        .collect()
}

/// Column names in order
pub fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}
