//! Error types for holder parsing

use std::num::ParseFloatError;

/// Errors that can occur when building a holder from text
#[derive(Debug, thiserror::Error)]
pub enum HolderError {
    #[error("Invalid number: {input:?}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Result type alias for holder operations
pub type HolderResult<T> = Result<T, HolderError>;
