use thiserror::Error;

/// Result type for hilite-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised while producing highlights
#[derive(Debug, Error)]
pub enum Error {
    /// A stored record carries a type code outside the known vocabulary
    #[error("Unknown highlight type code: {0:?}")]
    UnknownTypeCode(String),

    /// A stored record has offsets that do not form a half-open range
    #[error("Invalid highlight range: start={start}, end={end}")]
    InvalidRange { start: i128, end: i128 },

    /// Request context could not be built
    #[error("Invalid context: {0}")]
    InvalidContext(String),

    /// Fetching rows failed; not retried here
    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(#[from] hilite_index::Error),

    /// Scanner output lacks the expected markers or tokens
    #[error("Malformed scanner output: {0}")]
    MalformedScannerOutput(String),
}

impl From<hilite_types::Error> for Error {
    fn from(err: hilite_types::Error) -> Self {
        match err {
            hilite_types::Error::UnknownTypeCode(code) => Error::UnknownTypeCode(code),
            hilite_types::Error::InvalidRange { start, end } => Error::InvalidRange { start, end },
            hilite_types::Error::ZeroId(what) => {
                Error::InvalidContext(format!("{} id must be non-zero", what))
            }
            hilite_types::Error::InvalidTreeTable(name) => {
                Error::InvalidContext(format!("invalid tree table name {:?}", name))
            }
        }
    }
}
