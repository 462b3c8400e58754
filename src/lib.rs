//! FIFA 21 Field Normalization Library
//!
//! Cleans the six free-text columns of the FIFA 21 player export (value, wage,
//! release clause, height, weight, hits) into canonical numeric units.
//!
//! This library provides tools for:
//! - Parsing currency amounts with `€` symbols and `K`/`M` suffixes
//! - Converting heights (`cm`, bare, feet'inches) and weights (`kg`, `lbs`)
//! - Keeping blank, rejected and missing cells distinct from zero
//! - Mapping the parsers over polars frames, sequentially or concurrently
//! - Outcome statistics per column

pub mod applier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalizer;

// Re-export commonly used types
pub use applier::{ColumnApplier, NormalizationReport};
pub use config::{DomainBounds, NormalizerConfig};
pub use error::{NormalizerError, Result};
pub use models::{Column, Normalized, RejectReason};
