/// Fatal errors of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("No usable values: all {total} readings are missing or negative")]
    EmptySample { total: usize },
    #[display("Sample of {count} values has no spread; normalization is undefined")]
    DegenerateSample { count: usize },
    #[display("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[display("None of the {attempted} candidate distributions could be fitted")]
    NoSuccessfulFit { attempted: usize },
}
