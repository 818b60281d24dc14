//! Error types for the MkECS decomposition crate.
//!
//! The decomposition itself is total over well-formed input, so the only
//! failures are rejected preconditions and configuration I/O.

/// Result type for decomposition operations.
pub type Result<T> = std::result::Result<T, MkecsError>;

/// Primary error type for decomposition operations.
#[derive(Debug, thiserror::Error)]
pub enum MkecsError {
    /// The caller supplied invalid input (k, vertex ids, config values).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed or written.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MkecsError {
    fn from(err: serde_json::Error) -> Self {
        MkecsError::Serialization(err.to_string())
    }
}

/// Validation errors raised eagerly, before any contraction work begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A parameter is outside its valid range.
    #[error("parameter out of range: {name} = {value} (expected {expected})")]
    ParameterOutOfRange {
        /// Name of the parameter.
        name: String,
        /// The invalid value.
        value: String,
        /// Human-readable description of the valid range.
        expected: String,
    },

    /// An edge endpoint is negative.
    #[error("negative vertex id {vertex} in edge #{index}")]
    NegativeVertex {
        /// Position of the offending edge in the input.
        index: usize,
        /// The offending id.
        vertex: i64,
    },
}

impl MkecsError {
    /// Whether the error was caused by the caller's input rather than the
    /// environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, MkecsError::InvalidInput(_))
    }
}
