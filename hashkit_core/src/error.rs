//! Error types for the hashkit core library
//!
//! Errors are grouped by who can do something about them:
//! - I/O errors: reading input files or streams
//! - Validation errors: caller-correctable input (unknown names, unencodable text)
//! - Internal errors: a broken runtime environment, never recoverable

use thiserror::Error;

pub mod internal;
pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;
pub use internal::InternalError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hashkit core library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal library errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Whether this error signals a misconfigured runtime rather than bad input.
    ///
    /// Retrying a computation never changes its outcome, so fatal errors
    /// should be propagated to the top of the program.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}
