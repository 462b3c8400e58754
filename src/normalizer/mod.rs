//! Field normalization engine
//!
//! One pure parser per column turns a raw cell (`Option<&str>`) into a
//! [`Normalized`] outcome. Parsers keep no state and never panic on input, so
//! a column can be mapped in any order or in parallel.
//!
//! ## Architecture
//!
//! - [`structure`] - shared symbol/suffix validation and decimal parsing
//! - [`value`] - market value, euros, `€` required
//! - [`wage`] - weekly wage, thousands of euros
//! - [`release_clause`] - release clause, euros
//! - [`height`] - centimetres from `cm`, bare or feet'inches notation
//! - [`weight`] - kilograms from `kg` or `lbs`
//! - [`hits`] - popularity counter
//!
//! ## Usage
//!
//! ```rust
//! use fifa_normalizer::config::DomainBounds;
//! use fifa_normalizer::models::{Column, Normalized};
//!
//! let bounds = DomainBounds::default();
//! assert_eq!(Column::Wage.parse(Some("€560K"), &bounds), Normalized::Valid(560.0));
//! assert!(Column::Wage.parse(Some("€561K"), &bounds).is_rejected());
//! assert_eq!(Column::Height.parse(Some("5'10"), &bounds), Normalized::Valid(177.8));
//! ```

pub(crate) mod structure;

pub mod height;
pub mod hits;
pub mod release_clause;
pub mod value;
pub mod wage;
pub mod weight;

#[cfg(test)]
pub mod tests;

use crate::config::DomainBounds;
use crate::models::{Column, Normalized};

/// Normalize every cell of a column, preserving order
pub fn normalize_cells<'a, I>(column: Column, cells: I, bounds: &DomainBounds) -> Vec<Normalized>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    cells
        .into_iter()
        .map(|cell| column.parse(cell, bounds))
        .collect()
}
