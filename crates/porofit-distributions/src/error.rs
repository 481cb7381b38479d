use crate::FamilyId;

/// Reasons a family could not be fitted to a sample.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum FitError {
    #[display(
        "{family}: {num_params} parameters need more than {num_params} observations, got {actual}"
    )]
    InsufficientData {
        family: FamilyId,
        num_params: usize,
        actual: usize,
    },
    #[display("{family}: sample contains non-finite values")]
    NonFiniteData { family: FamilyId },
    #[display("{family}: sample has no spread")]
    DegenerateData { family: FamilyId },
    #[display("{family}: likelihood optimization did not converge after {iterations} iterations")]
    NotConverged { family: FamilyId, iterations: usize },
    #[display("{family}: invalid parameters ({reason})")]
    InvalidParameters { family: FamilyId, reason: String },
}

#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Unknown distribution family '{name}'")]
pub struct ParseFamilyIdError {
    pub name: String,
}
