//! Sequential applier tests

use super::*;
use crate::applier::{ColumnApplier, normalize_series};
use crate::config::NormalizerConfig;
use crate::error::NormalizerError;
use crate::models::{Column, RejectReason};

#[test]
fn test_apply_full_frame_layout() {
    let applier = ColumnApplier::new(NormalizerConfig::default()).unwrap();
    let (out, report) = applier.apply(create_raw_frame()).unwrap();

    assert_eq!(
        names(&out),
        vec![
            "Name",
            "Value",
            "Value_status",
            "Wages(€K)",
            "Wages(€K)_status",
            "Release Clause",
            "Release Clause_status",
            "Height(cm)",
            "Height(cm)_status",
            "Weight(KG)",
            "Weight(KG)_status",
            "Hits",
            "Hits_status",
        ]
    );
    assert_eq!(out.height(), 4);
    assert_eq!(report.rows, 4);
    assert_eq!(report.dropped_columns, vec!["W/F", "SM", "IR", "Contract"]);
    assert!(report.skipped_columns.is_empty());
}

#[test]
fn test_apply_values_and_outcomes() {
    let applier = ColumnApplier::new(NormalizerConfig::default()).unwrap();
    let (out, _) = applier.apply(create_raw_frame()).unwrap();

    assert_eq!(
        floats(&out, "Value"),
        vec![Some(67_500_000.0), Some(87_000_000.0), None, None]
    );
    assert_eq!(
        strings(&out, "Value_status"),
        vec![
            Some("valid".to_string()),
            Some("valid".to_string()),
            Some("missing".to_string()),
            Some("rejected".to_string()),
        ]
    );

    assert_eq!(
        floats(&out, "Wages(€K)"),
        vec![Some(560.0), Some(370.0), None, None]
    );
    assert_eq!(
        strings(&out, "Wages(€K)_status")[2..],
        [Some("blank".to_string()), Some("rejected".to_string())]
    );

    assert_eq!(
        floats(&out, "Release Clause"),
        vec![Some(138_400_000.0), Some(161_000_000.0), None, None]
    );

    // Null heights and hits persist as zero but stay marked as missing
    assert_eq!(
        floats(&out, "Height(cm)"),
        vec![Some(170.18), Some(181.0), Some(0.0), None]
    );
    assert_eq!(
        strings(&out, "Height(cm)_status")[2],
        Some("missing".to_string())
    );
    assert_eq!(
        floats(&out, "Hits"),
        vec![Some(771.0), Some(1200.0), Some(0.0), None]
    );

    assert_eq!(
        floats(&out, "Weight(KG)"),
        vec![Some(72.0), Some(154.0 / 2.20462), None, None]
    );
    assert_eq!(
        strings(&out, "Weight(KG)_status")[2],
        Some("missing".to_string())
    );
}

#[test]
fn test_apply_report_counts() {
    let applier = ColumnApplier::new(NormalizerConfig::default()).unwrap();
    let (_, report) = applier.apply(create_raw_frame()).unwrap();

    assert_eq!(report.columns.len(), 6);
    assert_eq!(report.total_rejected(), 6);

    let wage = report.column(Column::Wage).unwrap();
    assert_eq!((wage.valid, wage.blank, wage.rejected, wage.missing), (2, 1, 1, 0));
    assert_eq!(wage.rejected_for(RejectReason::Range), 1);
    assert_eq!(wage.reject_samples, vec!["€561K"]);
    assert_eq!(wage.min, Some(370.0));
    assert_eq!(wage.max, Some(560.0));

    let clause = report.column(Column::ReleaseClause).unwrap();
    assert_eq!(clause.rejected_for(RejectReason::Structural), 1);
    assert_eq!(clause.blank, 1);
}

#[test]
fn test_apply_without_renames_and_with_reasons() {
    let config = NormalizerConfig::default()
        .with_columns(vec![Column::Weight, Column::Hits])
        .without_renames()
        .with_reject_reasons();
    let applier = ColumnApplier::new(config).unwrap();
    let (out, _) = applier.apply(create_raw_frame()).unwrap();

    assert!(names(&out).contains(&"Weight".to_string()));
    assert!(names(&out).contains(&"Weight_status".to_string()));
    assert_eq!(
        strings(&out, "Weight_reason"),
        vec![None, None, None, Some("range".to_string())]
    );
    assert_eq!(
        strings(&out, "Hits_reason")[3],
        Some("structural".to_string())
    );
    // Unconfigured columns are passed through untouched
    assert_eq!(
        strings(&out, "Wage")[0],
        Some("€560K".to_string())
    );
}

#[test]
fn test_apply_missing_column_strict_and_lenient() {
    let frame = df!("Wage" => &["€1K", "€2K"]).unwrap();

    let strict = ColumnApplier::new(NormalizerConfig::default()).unwrap();
    let err = strict.apply(frame.clone()).unwrap_err();
    assert!(matches!(err, NormalizerError::ColumnNotFound { .. }));

    let lenient = ColumnApplier::new(NormalizerConfig::default().lenient()).unwrap();
    let (out, report) = lenient.apply(frame).unwrap();
    assert_eq!(floats(&out, "Wages(€K)"), vec![Some(1.0), Some(2.0)]);
    assert_eq!(report.columns.len(), 1);
    assert_eq!(report.skipped_columns.len(), 5);
    assert!(report.dropped_columns.is_empty());
}

#[test]
fn test_normalize_series_casts_numeric_input() {
    let series = Series::new("Hits".into(), &[Some(10i64), None, Some(372)]);
    let normalized =
        normalize_series(Column::Hits, &series, &NormalizerConfig::default()).unwrap();

    let values: Vec<Option<f64>> = normalized.values.f64().unwrap().into_iter().collect();
    assert_eq!(values, vec![Some(10.0), Some(0.0), Some(372.0)]);
    assert_eq!(normalized.stats.missing, 1);
}

#[test]
fn test_normalize_series_refuses_binary() {
    let series = Series::new("Height".into(), &[b"180cm".as_slice()]);
    let err = normalize_series(Column::Height, &series, &NormalizerConfig::default())
        .unwrap_err();
    assert!(matches!(err, NormalizerError::UnsupportedDtype { .. }));
}

#[test]
fn test_applier_rejects_invalid_config() {
    let err = ColumnApplier::new(NormalizerConfig::default().with_workers(0)).unwrap_err();
    assert!(matches!(err, NormalizerError::Configuration { .. }));
}
