use thiserror::Error;

/// Error type shared across the crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("inconsistent row length: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("empty data: {0}")]
    EmptyData(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("operation failed: {0}")]
    OperationFailed(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
