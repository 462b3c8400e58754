//! Column applier: maps the field parsers over polars frames
//!
//! For every configured column the applier replaces the raw text column with
//! a `Float64` value column and inserts an outcome column right after it, so
//! `blank`, `rejected` and `missing` cells stay distinguishable from zero once
//! persisted. Columns listed for dropping are removed in the same pass.
//!
//! Cells are independent, so columns may be normalized concurrently
//! ([`ColumnApplier::apply_concurrent`]); the resulting frame is identical to
//! the sequential [`ColumnApplier::apply`].

pub mod stats;

#[cfg(test)]
pub mod tests;

pub use stats::{ColumnStats, NormalizationReport};

use crate::config::NormalizerConfig;
use crate::constants::status_column_name;
use crate::error::{NormalizerError, Result};
use crate::models::Column;
use futures::stream::{self, StreamExt};
use polars::prelude::{DataFrame, DataType, IntoColumn, NamedFrom, Series};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, info};

/// Output of normalizing one column
#[derive(Debug, Clone)]
pub struct NormalizedColumn {
    pub column: Column,
    /// Canonical values; null where nothing should be persisted
    pub values: Series,
    /// Outcome label per row
    pub status: Series,
    /// Reject reason per row, when requested
    pub reasons: Option<Series>,
    pub stats: ColumnStats,
}

/// Normalize a single series with one column's parser
///
/// Non-text dtypes are cast to text first; binary and list columns cannot be
/// read as cells and are refused.
pub fn normalize_series(
    column: Column,
    series: &Series,
    config: &NormalizerConfig,
) -> Result<NormalizedColumn> {
    let text = match series.dtype() {
        DataType::String => series.clone(),
        DataType::Binary | DataType::List(_) => {
            return Err(NormalizerError::UnsupportedDtype {
                column: series.name().to_string(),
                dtype: series.dtype().to_string(),
            });
        }
        _ => series.cast(&DataType::String)?,
    };
    let cells = text.str()?;

    let mut stats = ColumnStats::new(column);
    let mut values = Vec::with_capacity(cells.len());
    let mut labels = Vec::with_capacity(cells.len());
    let mut reasons = Vec::with_capacity(if config.emit_reject_reasons {
        cells.len()
    } else {
        0
    });

    for cell in cells.into_iter() {
        let outcome = column.parse(cell, &config.bounds);
        stats.record(cell, &outcome);
        values.push(column.persisted_value(&outcome));
        labels.push(outcome.status_label());
        if config.emit_reject_reasons {
            reasons.push(outcome.reject_reason().map(|reason| reason.label()));
        }
    }

    let value_name = config.output_name(column);
    let status_name = status_column_name(value_name, &config.status_suffix);

    let reasons = config.emit_reject_reasons.then(|| {
        Series::new(
            status_column_name(value_name, "_reason").as_str().into(),
            reasons,
        )
    });

    debug!("{}", stats.summary());

    Ok(NormalizedColumn {
        column,
        values: Series::new(value_name.into(), values),
        status: Series::new(status_name.as_str().into(), labels),
        reasons,
        stats,
    })
}

/// Applies the configured parsers to a frame
#[derive(Debug, Clone)]
pub struct ColumnApplier {
    config: Arc<NormalizerConfig>,
}

impl ColumnApplier {
    /// Create an applier, validating the configuration
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize all configured columns one after another
    pub fn apply(&self, df: DataFrame) -> Result<(DataFrame, NormalizationReport)> {
        let start = Instant::now();
        let (inputs, skipped) = self.collect_inputs(&df)?;

        let normalized = inputs
            .into_iter()
            .map(|(column, series)| normalize_series(column, &series, &self.config))
            .collect::<Result<Vec<_>>>()?;

        let result = self.assemble(df, normalized, skipped)?;
        info!("Normalization finished in {}ms", start.elapsed().as_millis());
        Ok(result)
    }

    /// Normalize configured columns on blocking worker threads
    ///
    /// At most `workers` columns are processed at once. Output is identical to
    /// [`ColumnApplier::apply`].
    pub async fn apply_concurrent(&self, df: DataFrame) -> Result<(DataFrame, NormalizationReport)> {
        let start = Instant::now();
        let (inputs, skipped) = self.collect_inputs(&df)?;
        let concurrent_limit = self.config.workers.max(1);

        debug!(
            "Normalizing {} columns with up to {} workers",
            inputs.len(),
            concurrent_limit
        );

        let results: Vec<Result<(usize, NormalizedColumn)>> =
            stream::iter(inputs.into_iter().enumerate())
                .map(|(index, (column, series))| {
                    let config = Arc::clone(&self.config);
                    async move {
                        let normalized =
                            task::spawn_blocking(move || normalize_series(column, &series, &config))
                                .await
                                .map_err(|e| NormalizerError::Task {
                                    column: column.to_string(),
                                    reason: e.to_string(),
                                })??;
                        Ok((index, normalized))
                    }
                })
                .buffer_unordered(concurrent_limit)
                .collect()
                .await;

        let mut indexed = results.into_iter().collect::<Result<Vec<_>>>()?;
        indexed.sort_by_key(|(index, _)| *index);
        let normalized = indexed.into_iter().map(|(_, column)| column).collect();

        let result = self.assemble(df, normalized, skipped)?;
        info!(
            "Concurrent normalization finished in {}ms",
            start.elapsed().as_millis()
        );
        Ok(result)
    }

    /// Pick the configured source columns out of the frame
    fn collect_inputs(&self, df: &DataFrame) -> Result<(Vec<(Column, Series)>, Vec<String>)> {
        let mut inputs = Vec::with_capacity(self.config.columns.len());
        let mut skipped = Vec::new();

        for &column in &self.config.columns {
            let name = column.source_name();
            match df.get_column_index(name) {
                Some(index) => {
                    let series = df.get_columns()[index].as_materialized_series().clone();
                    inputs.push((column, series));
                }
                None if self.config.strict_columns => {
                    return Err(NormalizerError::column_not_found(name));
                }
                None => {
                    debug!("Column '{}' not present, skipping", name);
                    skipped.push(name.to_string());
                }
            }
        }

        Ok((inputs, skipped))
    }

    /// Rebuild the frame: normalized columns in place, dropped columns removed
    fn assemble(
        &self,
        df: DataFrame,
        normalized: Vec<NormalizedColumn>,
        skipped_columns: Vec<String>,
    ) -> Result<(DataFrame, NormalizationReport)> {
        let rows = df.height();
        let mut column_stats = Vec::with_capacity(normalized.len());
        let mut by_source: HashMap<&'static str, NormalizedColumn> = HashMap::new();
        for column in normalized {
            column_stats.push(column.stats.clone());
            by_source.insert(column.column.source_name(), column);
        }

        let mut dropped_columns = Vec::new();
        let mut output = Vec::with_capacity(df.width() + by_source.len() * 2);

        for existing in df.get_columns() {
            let name = existing.name().as_str();
            if let Some(normalized) = by_source.remove(name) {
                output.push(normalized.values.into_column());
                output.push(normalized.status.into_column());
                if let Some(reasons) = normalized.reasons {
                    output.push(reasons.into_column());
                }
            } else if self.config.drop_columns.iter().any(|drop| drop == name) {
                dropped_columns.push(name.to_string());
            } else {
                output.push(existing.clone());
            }
        }

        let report = NormalizationReport {
            rows,
            columns: column_stats,
            skipped_columns,
            dropped_columns,
        };
        report.log();

        Ok((DataFrame::new(output)?, report))
    }
}
