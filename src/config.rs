//! Configuration management and validation.
//!
//! Holds the domain bounds each parser enforces and the settings the column
//! applier needs (which columns to clean, which to drop, how outcome columns
//! are named). Configuration is immutable once handed to an applier.

use crate::constants::{
    DEFAULT_DROP_COLUMNS, DEFAULT_HEIGHT_MAX, DEFAULT_HEIGHT_MIN_EXCLUSIVE,
    DEFAULT_POUNDS_PER_KILOGRAM, DEFAULT_RELEASE_CLAUSE_MAX, DEFAULT_STATUS_SUFFIX,
    DEFAULT_VALUE_MAX, DEFAULT_WAGE_MAX_THOUSANDS, DEFAULT_WEIGHT_MAX, DEFAULT_WEIGHT_MIN,
};
use crate::error::{NormalizerError, Result};
use crate::models::Column;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Numeric domain enforced by each parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainBounds {
    /// Upper bound for market value in euros (lower bound is 0)
    pub value_max: f64,

    /// Upper bound for wage in thousands of euros
    pub wage_max_thousands: f64,

    /// Upper bound for release clause in euros
    pub release_clause_max: f64,

    /// Height must be strictly above this (cm)
    pub height_min_exclusive: f64,

    /// Height upper bound, inclusive (cm)
    pub height_max: f64,

    /// Weight lower bound, inclusive (kg)
    pub weight_min: f64,

    /// Weight upper bound, inclusive (kg)
    pub weight_max: f64,

    /// Conversion factor for pound-suffixed weights
    pub pounds_per_kilogram: f64,
}

impl Default for DomainBounds {
    fn default() -> Self {
        Self {
            value_max: DEFAULT_VALUE_MAX,
            wage_max_thousands: DEFAULT_WAGE_MAX_THOUSANDS,
            release_clause_max: DEFAULT_RELEASE_CLAUSE_MAX,
            height_min_exclusive: DEFAULT_HEIGHT_MIN_EXCLUSIVE,
            height_max: DEFAULT_HEIGHT_MAX,
            weight_min: DEFAULT_WEIGHT_MIN,
            weight_max: DEFAULT_WEIGHT_MAX,
            pounds_per_kilogram: DEFAULT_POUNDS_PER_KILOGRAM,
        }
    }
}

impl DomainBounds {
    /// Validate bounds for consistency
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("value_max", self.value_max),
            ("wage_max_thousands", self.wage_max_thousands),
            ("release_clause_max", self.release_clause_max),
            ("height_max", self.height_max),
            ("weight_max", self.weight_max),
            ("pounds_per_kilogram", self.pounds_per_kilogram),
        ];

        for (name, bound) in positive {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(NormalizerError::configuration(format!(
                    "{} must be a positive finite number, got {}",
                    name, bound
                )));
            }
        }

        if !self.height_min_exclusive.is_finite() || self.height_min_exclusive >= self.height_max {
            return Err(NormalizerError::configuration(format!(
                "height range ({}, {}] is empty",
                self.height_min_exclusive, self.height_max
            )));
        }

        if !self.weight_min.is_finite() || self.weight_min > self.weight_max {
            return Err(NormalizerError::configuration(format!(
                "weight range [{}, {}] is empty",
                self.weight_min, self.weight_max
            )));
        }

        Ok(())
    }
}

/// Settings for a normalization run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Domain bounds enforced by the parsers
    pub bounds: DomainBounds,

    /// Columns to normalize
    pub columns: Vec<Column>,

    /// Columns removed from the frame after normalization
    pub drop_columns: Vec<String>,

    /// Rename normalized columns to their unit-bearing names
    pub rename_columns: bool,

    /// Suffix of the per-column outcome column
    pub status_suffix: String,

    /// Also emit a reject-reason column next to each outcome column
    pub emit_reject_reasons: bool,

    /// Number of columns normalized concurrently
    pub workers: usize,

    /// Fail when a configured source column is absent (otherwise warn and skip)
    pub strict_columns: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            bounds: DomainBounds::default(),
            columns: Column::ALL.to_vec(),
            drop_columns: DEFAULT_DROP_COLUMNS.iter().map(|s| s.to_string()).collect(),
            rename_columns: true,
            status_suffix: DEFAULT_STATUS_SUFFIX.to_string(),
            emit_reject_reasons: false,
            workers: num_cpus::get().max(1),
            strict_columns: true,
        }
    }
}

impl NormalizerConfig {
    /// Load a configuration from a JSON file; absent keys fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: NormalizerConfig =
            serde_json::from_str(&contents).map_err(|e| NormalizerError::ConfigFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Restrict the run to the given columns
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Replace the list of dropped columns
    pub fn with_drop_columns(mut self, drop_columns: Vec<String>) -> Self {
        self.drop_columns = drop_columns;
        self
    }

    /// Set the number of concurrent column workers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Replace the domain bounds
    pub fn with_bounds(mut self, bounds: DomainBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Keep source column names for normalized columns
    pub fn without_renames(mut self) -> Self {
        self.rename_columns = false;
        self
    }

    /// Emit reject-reason columns
    pub fn with_reject_reasons(mut self) -> Self {
        self.emit_reject_reasons = true;
        self
    }

    /// Skip configured columns that are absent instead of failing
    pub fn lenient(mut self) -> Self {
        self.strict_columns = false;
        self
    }

    /// Name of the column a normalized column is written to
    pub fn output_name(&self, column: Column) -> &'static str {
        if self.rename_columns {
            column.output_name()
        } else {
            column.source_name()
        }
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;

        if self.workers == 0 {
            return Err(NormalizerError::configuration(
                "workers must be at least 1",
            ));
        }

        if self.status_suffix.is_empty() {
            return Err(NormalizerError::configuration(
                "status_suffix cannot be empty",
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column) {
                return Err(NormalizerError::configuration(format!(
                    "column {} listed more than once",
                    column
                )));
            }
        }

        for column in &self.columns {
            if self.drop_columns.iter().any(|d| d == column.source_name()) {
                return Err(NormalizerError::configuration(format!(
                    "column {} is both normalized and dropped",
                    column
                )));
            }
        }

        Ok(())
    }
}
