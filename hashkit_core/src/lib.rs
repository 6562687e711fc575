//! hashkit Core Library
//!
//! Multi-algorithm digest service: SHA-256, SHA-512, CRC-32 and MD5 are
//! dispatched to existing primitives and their output is rendered as
//! uppercase hexadecimal.
//!
//! ```
//! use hashkit_core::HashAlgorithm;
//!
//! let hex = HashAlgorithm::Md5.hash_text("", None).unwrap();
//! assert_eq!(hex, "D41D8CD98F00B204E9800998ECF8427E");
//! ```

pub mod encoding;
pub mod error;
pub mod formatter;
pub mod hashing;

// Re-export main types
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use formatter::{crc_value_to_hex, minimal_be_bytes, to_hex};
pub use hashing::{
    DigestPrimitive, HashAlgorithm, HashCalculator, HashResult, PrimitiveRegistry,
    StreamingHasher,
};

/// Core client configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClientConfig {
    /// Read size used when hashing files and streams
    pub chunk_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chunk_size: 64 * 1024, // 64KB reads
        }
    }
}

impl ClientConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self { chunk_size: 1024 }
    }
}
