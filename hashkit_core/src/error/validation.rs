//! Validation related error types

use thiserror::Error;

/// Caller-correctable input errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Algorithm name does not match any supported variant
    #[error("Unknown hash algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Character encoding label is not supported
    #[error("Unknown character encoding: {label}")]
    UnknownEncoding { label: String },

    /// Text contains a character the requested encoding cannot represent
    #[error(
        "Cannot encode {input:?} as {encoding}: character {character:?} at position {position} is not representable"
    )]
    UnencodableText {
        encoding: String,
        input: String,
        character: char,
        position: usize,
    },

    /// Invalid input parameter
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    /// Create an unknown algorithm error
    pub fn unknown_algorithm(name: &str) -> Self {
        Self::UnknownAlgorithm {
            name: name.to_string(),
        }
    }

    /// Create an unknown encoding error
    pub fn unknown_encoding(label: &str) -> Self {
        Self::UnknownEncoding {
            label: label.to_string(),
        }
    }

    /// Create an unencodable text error
    pub fn unencodable_text(encoding: &str, input: &str, character: char, position: usize) -> Self {
        Self::UnencodableText {
            encoding: encoding.to_string(),
            input: input.to_string(),
            character,
            position,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}
