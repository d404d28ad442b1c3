use thiserror::Error;

/// Fatal errors that abort a histogram run. Per-record weight failures are
/// not errors at this level; see [`WeightError`].
#[derive(Debug, Error)]
pub enum HistError {
    #[error("input read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid field delimiter: {0}")]
    Delimiter(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, HistError>;

/// Recoverable failure to obtain a record's weight. The record is skipped
/// entirely and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    #[error("short record")]
    ShortRecord,

    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
}
