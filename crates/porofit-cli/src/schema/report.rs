use std::path::PathBuf;

use chrono::{DateTime, Utc};
use porofit_analysis::pipeline::{AnalysisConfig, AnalysisOutcome};
use serde::Serialize;

/// JSON report of one `fit` run.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FitReport<'a> {
    /// Time the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// LAS file the curve was read from
    pub source: PathBuf,
    pub curve: CurveInfo,
    pub config: &'a AnalysisConfig,
    /// Cleaning summary, normalization constants and ranking
    #[serde(flatten)]
    pub outcome: &'a AnalysisOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CurveInfo {
    pub mnemonic: String,
    pub unit: String,
    pub description: String,
}
