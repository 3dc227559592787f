//! Error types for coupling-mock-rs.

use thiserror::Error;

/// The main error type for coupling-mock-rs operations.
///
/// Apart from the I/O and JSON variants, every error here is a contract
/// violation by the calling test: a size or name that does not match the
/// fixture's fixed dataset.
#[derive(Error, Debug)]
pub enum MockError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The mesh name is not the fixture mesh.
    #[error("mesh '{0}' is not the fixture mesh")]
    UnknownMesh(String),

    /// A bounding box entry differs from the fixture bounding box.
    #[error("bounding box mismatch at index {index}: expected {expected}, got {actual}")]
    BoundingBoxMismatch {
        index: usize,
        expected: f64,
        actual: f64,
    },

    /// A write or read would run past the end of the exchange buffer.
    #[error("exchange buffer overflow: capacity {capacity}, requested {requested}")]
    BufferOverflow { capacity: usize, requested: usize },

    /// An action token that does not name any known action.
    #[error("unknown action token '{0}'")]
    UnknownAction(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MockError {
    /// Returns true if this error is a caller contract violation rather than
    /// an environment failure.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Json(_))
    }
}

/// A specialized Result type for coupling-mock-rs operations.
pub type Result<T> = std::result::Result<T, MockError>;
