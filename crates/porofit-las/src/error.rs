use std::{io, path::PathBuf};

/// Errors raised while reading a LAS file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LasError {
    #[display("Failed to read '{}'", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("Missing required section '~{section}'")]
    MissingSection { section: &'static str },
    #[display("Line {line}: malformed header line {text:?}")]
    MalformedHeader { line: usize, text: String },
    #[display("Line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[display("Line {line}: expected {expected} values, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[display("Wrapped data holds {values} values, which is not a multiple of {curves} curves")]
    TruncatedData { values: usize, curves: usize },
    #[display("Section '~Curve' defines no curves")]
    NoCurves,
}
