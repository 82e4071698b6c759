use thiserror::Error;

/// Result type for hilite-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building highlight values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raw type code is not part of the known storage vocabulary
    #[error("Unknown highlight type code: {0:?}")]
    UnknownTypeCode(String),

    /// Offsets do not describe a half-open range
    #[error("Invalid range: start={start}, end={end}")]
    InvalidRange { start: i128, end: i128 },

    /// Zero is the storage encoding for "absent", never a real id
    #[error("{0} id must be non-zero")]
    ZeroId(&'static str),

    /// Tree table name failed validation
    #[error("Invalid tree table name: {0:?}")]
    InvalidTreeTable(String),
}
