//! Error types for the association-measures library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum AmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid numeric value '{value}' at row {row}, column '{column}'")]
    InvalidValue {
        value: String,
        row: usize,
        column: String,
    },

    #[error(
        "Columns {columns:?} match no recognized frequency notation \
         (contingency: O11/O12/O21/O22, frequency signature: f/f1/f2/N, \
         corpus frequencies: f1/f2/N1/N2)"
    )]
    UnknownNotation { columns: Vec<String> },

    #[error("Conflicting counts at row {row}: f = {f} but O11 = {o11}")]
    ConflictingCounts { row: usize, f: f64, o11: f64 },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, AmError>;
