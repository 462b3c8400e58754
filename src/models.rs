//! Core data structures for field normalization.
//!
//! Defines the per-cell outcome type, the reasons a cell can be rejected,
//! and the identity of the six columns the engine knows how to clean.

use crate::config::DomainBounds;
use crate::constants::{columns, status};
use crate::error::NormalizerError;
use crate::normalizer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a cell was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectReason {
    /// Wrong symbol count or placement, misplaced suffix, forbidden character, negative sign
    Structural,
    /// Body is not a decimal number once structure checks pass
    Parse,
    /// Well-formed number outside the column's domain
    Range,
}

impl RejectReason {
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::Structural => "structural",
            RejectReason::Parse => "parse",
            RejectReason::Range => "range",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of normalizing a single cell
///
/// `Blank` and `Missing` are deliberately distinct from `Valid(0.0)`: several
/// columns treat zero as a legitimate value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// Parsed value in the column's canonical unit
    Valid(f64),
    /// Input carried no information (empty, whitespace, bare unit token)
    Blank,
    /// Input was malformed or out of domain
    Rejected(RejectReason),
    /// Input cell was null
    Missing,
}

impl Normalized {
    pub(crate) fn structural() -> Self {
        Normalized::Rejected(RejectReason::Structural)
    }

    pub(crate) fn unparseable() -> Self {
        Normalized::Rejected(RejectReason::Parse)
    }

    pub(crate) fn out_of_range() -> Self {
        Normalized::Rejected(RejectReason::Range)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Normalized::Valid(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Normalized::Blank)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Normalized::Rejected(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Normalized::Missing)
    }

    /// The parsed value, if the cell was valid
    pub fn value(&self) -> Option<f64> {
        match self {
            Normalized::Valid(v) => Some(*v),
            _ => None,
        }
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Normalized::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Label written to outcome columns
    pub fn status_label(&self) -> &'static str {
        match self {
            Normalized::Valid(_) => status::VALID,
            Normalized::Blank => status::BLANK,
            Normalized::Rejected(_) => status::REJECTED,
            Normalized::Missing => status::MISSING,
        }
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Valid(v) => write!(f, "valid({})", v),
            Normalized::Blank => f.write_str(status::BLANK),
            Normalized::Rejected(reason) => write!(f, "rejected({})", reason),
            Normalized::Missing => f.write_str(status::MISSING),
        }
    }
}

/// How a null input cell is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingPolicy {
    /// Persist as `0.0`
    Zero,
    /// Persist as a null marker
    Null,
}

/// The six columns handled by the normalization engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    Value,
    Wage,
    ReleaseClause,
    Height,
    Weight,
    Hits,
}

impl Column {
    /// Every column, in the order the cleaning pass visits them
    pub const ALL: [Column; 6] = [
        Column::Value,
        Column::Weight,
        Column::Wage,
        Column::Height,
        Column::Hits,
        Column::ReleaseClause,
    ];

    /// Column name in the raw export
    pub fn source_name(&self) -> &'static str {
        match self {
            Column::Value => columns::VALUE,
            Column::Wage => columns::WAGE,
            Column::ReleaseClause => columns::RELEASE_CLAUSE,
            Column::Height => columns::HEIGHT,
            Column::Weight => columns::WEIGHT,
            Column::Hits => columns::HITS,
        }
    }

    /// Column name after cleaning
    pub fn output_name(&self) -> &'static str {
        match self {
            Column::Wage => columns::WAGES_THOUSANDS,
            Column::Height => columns::HEIGHT_CM,
            Column::Weight => columns::WEIGHT_KG,
            other => other.source_name(),
        }
    }

    /// Canonical unit of valid values
    pub fn unit(&self) -> &'static str {
        match self {
            Column::Value | Column::ReleaseClause => "EUR",
            Column::Wage => "thousand EUR",
            Column::Height => "cm",
            Column::Weight => "kg",
            Column::Hits => "count",
        }
    }

    pub fn missing_policy(&self) -> MissingPolicy {
        match self {
            Column::Height | Column::Hits => MissingPolicy::Zero,
            _ => MissingPolicy::Null,
        }
    }

    /// Run this column's parser over one raw cell
    pub fn parse(&self, raw: Option<&str>, bounds: &DomainBounds) -> Normalized {
        match self {
            Column::Value => normalizer::value::parse(raw, bounds),
            Column::Wage => normalizer::wage::parse(raw, bounds),
            Column::ReleaseClause => normalizer::release_clause::parse(raw, bounds),
            Column::Height => normalizer::height::parse(raw, bounds),
            Column::Weight => normalizer::weight::parse(raw, bounds),
            Column::Hits => normalizer::hits::parse(raw),
        }
    }

    /// Numeric value stored for an outcome, honouring the missing policy
    pub fn persisted_value(&self, outcome: &Normalized) -> Option<f64> {
        match outcome {
            Normalized::Valid(v) => Some(*v),
            Normalized::Missing => match self.missing_policy() {
                MissingPolicy::Zero => Some(0.0),
                MissingPolicy::Null => None,
            },
            Normalized::Blank | Normalized::Rejected(_) => None,
        }
    }

    /// Short identifier used on the command line and in config files
    pub fn key(&self) -> &'static str {
        match self {
            Column::Value => "value",
            Column::Wage => "wage",
            Column::ReleaseClause => "release-clause",
            Column::Height => "height",
            Column::Weight => "weight",
            Column::Hits => "hits",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}

impl FromStr for Column {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "value" => Ok(Column::Value),
            "wage" | "wages" => Ok(Column::Wage),
            "release-clause" | "clause" => Ok(Column::ReleaseClause),
            "height" => Ok(Column::Height),
            "weight" => Ok(Column::Weight),
            "hits" => Ok(Column::Hits),
            _ => Err(NormalizerError::UnknownColumn {
                name: s.to_string(),
            }),
        }
    }
}
