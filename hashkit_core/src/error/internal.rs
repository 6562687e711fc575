//! Internal library error types

use thiserror::Error;

/// Errors caused by the runtime environment rather than by the caller
#[derive(Error, Debug)]
pub enum InternalError {
    /// A digest primitive for one of the fixed algorithm names is missing
    #[error("Digest primitive '{algorithm}' is unavailable; the runtime is misconfigured")]
    PrimitiveUnavailable { algorithm: String },
}

impl InternalError {
    /// Create a primitive unavailable error
    pub fn primitive_unavailable(algorithm: &str) -> Self {
        Self::PrimitiveUnavailable {
            algorithm: algorithm.to_string(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::PrimitiveUnavailable { .. } => false,
        }
    }
}
