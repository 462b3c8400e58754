//! Outcome statistics for normalized columns
//!
//! Counts every outcome per column so callers can see how much of the export
//! was usable without re-scanning the cleaned frame.

use crate::constants::REJECT_SAMPLE_LIMIT;
use crate::models::{Column, Normalized, RejectReason};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Outcome counts for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: Column,
    pub total: usize,
    pub valid: usize,
    pub blank: usize,
    pub rejected: usize,
    pub missing: usize,
    pub rejected_by_reason: BTreeMap<RejectReason, usize>,
    /// Smallest valid value seen
    pub min: Option<f64>,
    /// Largest valid value seen
    pub max: Option<f64>,
    /// First few rejected raw cells, for diagnostics
    pub reject_samples: Vec<String>,
}

impl ColumnStats {
    pub fn new(column: Column) -> Self {
        Self {
            column,
            total: 0,
            valid: 0,
            blank: 0,
            rejected: 0,
            missing: 0,
            rejected_by_reason: BTreeMap::new(),
            min: None,
            max: None,
            reject_samples: Vec::new(),
        }
    }

    /// Record one cell's outcome
    pub fn record(&mut self, raw: Option<&str>, outcome: &Normalized) {
        self.total += 1;
        match outcome {
            Normalized::Valid(v) => {
                self.valid += 1;
                self.min = Some(self.min.map_or(*v, |m| m.min(*v)));
                self.max = Some(self.max.map_or(*v, |m| m.max(*v)));
            }
            Normalized::Blank => self.blank += 1,
            Normalized::Missing => self.missing += 1,
            Normalized::Rejected(reason) => {
                self.rejected += 1;
                *self.rejected_by_reason.entry(*reason).or_insert(0) += 1;
                if self.reject_samples.len() < REJECT_SAMPLE_LIMIT {
                    self.reject_samples.push(raw.unwrap_or_default().to_string());
                }
            }
        }
    }

    /// Rejections for one reason
    pub fn rejected_for(&self, reason: RejectReason) -> usize {
        self.rejected_by_reason.get(&reason).copied().unwrap_or(0)
    }

    /// Percentage of cells that parsed to a value
    pub fn validity_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.valid as f64 / self.total as f64) * 100.0
        }
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{}: {} cells | valid {} ({:.1}%) | blank {} | missing {} | rejected {} \
             (structural {}, parse {}, range {})",
            self.column,
            self.total,
            self.valid,
            self.validity_rate(),
            self.blank,
            self.missing,
            self.rejected,
            self.rejected_for(RejectReason::Structural),
            self.rejected_for(RejectReason::Parse),
            self.rejected_for(RejectReason::Range),
        )
    }
}

/// Result of normalizing a frame
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizationReport {
    /// Rows in the frame
    pub rows: usize,
    /// Stats per normalized column, in configured order
    pub columns: Vec<ColumnStats>,
    /// Configured columns absent from the frame
    pub skipped_columns: Vec<String>,
    /// Columns removed from the frame
    pub dropped_columns: Vec<String>,
}

impl NormalizationReport {
    pub fn column(&self, column: Column) -> Option<&ColumnStats> {
        self.columns.iter().find(|stats| stats.column == column)
    }

    pub fn total_rejected(&self) -> usize {
        self.columns.iter().map(|stats| stats.rejected).sum()
    }

    /// Emit the report through tracing
    pub fn log(&self) {
        info!(
            "Normalized {} columns over {} rows ({} cells rejected)",
            self.columns.len(),
            self.rows,
            self.total_rejected()
        );
        for stats in &self.columns {
            info!("{}", stats.summary());
            if !stats.reject_samples.is_empty() {
                debug!("{} rejected samples: {:?}", stats.column, stats.reject_samples);
            }
        }
        if !self.skipped_columns.is_empty() {
            warn!("Columns not found and skipped: {:?}", self.skipped_columns);
        }
        if !self.dropped_columns.is_empty() {
            debug!("Dropped columns: {:?}", self.dropped_columns);
        }
    }
}
