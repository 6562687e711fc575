//! Digest calculation for the hashkit core library
//!
//! [`HashAlgorithm`] selects one of four algorithms. SHA-256, SHA-512 and MD5
//! are dispatched by name to a stateless primitive from the
//! [`PrimitiveRegistry`]; CRC-32 is handled by its own branch because its
//! result is an integer, not a fixed-width buffer.

use crate::encoding::TextEncoding;
use crate::formatter;
use crate::{
    ClientConfig, Error, Result,
    error::{IoError, ValidationError},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;

mod algorithms;
mod registry;
mod traits;

pub use registry::PrimitiveRegistry;
pub use traits::{DigestPrimitive, StreamingHasher};

/// Hash algorithms supported by the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256, 32-byte digest
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-512, 64-byte digest
    #[serde(rename = "SHA-512")]
    Sha512,
    /// CRC-32 checksum, minimal big-endian bytes
    #[serde(rename = "CRC-32")]
    Crc32,
    /// MD5, 16-byte digest
    #[serde(rename = "MD5")]
    Md5,
}

impl HashAlgorithm {
    /// Every supported algorithm, in declaration order
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Crc32,
        HashAlgorithm::Md5,
    ];

    /// Name of the underlying digest primitive
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Crc32 => "CRC-32",
            HashAlgorithm::Md5 => "MD5",
        }
    }

    /// Digest length in bytes, `None` for the variable-width CRC-32
    pub fn output_len(&self) -> Option<usize> {
        match self {
            HashAlgorithm::Sha256 => Some(32),
            HashAlgorithm::Sha512 => Some(64),
            HashAlgorithm::Crc32 => None,
            HashAlgorithm::Md5 => Some(16),
        }
    }

    /// Compute the raw digest of `input`.
    ///
    /// CRC-32 returns the checksum as minimal big-endian bytes; the other
    /// variants return the primitive's full fixed-width output.
    pub fn compute(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compute_with(PrimitiveRegistry::global(), input)
    }

    /// Compute the raw digest of `input`, resolving primitives in `registry`
    pub fn compute_with(&self, registry: &PrimitiveRegistry, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            HashAlgorithm::Crc32 => Ok(formatter::minimal_be_bytes(algorithms::crc32::checksum(
                input,
            ))),
            _ => {
                let primitive = registry.lookup(self.name())?;
                Ok(primitive.digest(input))
            }
        }
    }

    /// Encode `text` (UTF-8 when `encoding` is `None`) and compute its digest
    pub fn compute_text(&self, text: &str, encoding: Option<TextEncoding>) -> Result<Vec<u8>> {
        let bytes = encoding.unwrap_or_default().encode(text)?;
        self.compute(&bytes)
    }

    /// Render a digest produced by this algorithm as uppercase hex
    pub fn render(&self, digest: &[u8]) -> String {
        match self {
            HashAlgorithm::Crc32 => formatter::integer_to_hex(formatter::fold_be(digest)),
            _ => formatter::to_hex(digest),
        }
    }

    /// Compute and render in one step
    pub fn hash(&self, input: &[u8]) -> Result<String> {
        Ok(self.render(&self.compute(input)?))
    }

    /// Encode, compute and render in one step
    pub fn hash_text(&self, text: &str, encoding: Option<TextEncoding>) -> Result<String> {
        Ok(self.render(&self.compute_text(text, encoding)?))
    }

    /// Create an incremental hasher whose output matches [`HashAlgorithm::compute`]
    pub fn hasher(&self) -> Result<Box<dyn StreamingHasher>> {
        match self {
            HashAlgorithm::Crc32 => Ok(Box::new(algorithms::crc32::Crc32StreamingHasher::new())),
            _ => Ok(PrimitiveRegistry::global()
                .lookup(self.name())?
                .create_hasher()),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.replace('-', "").to_lowercase().as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "crc32" => Ok(HashAlgorithm::Crc32),
            "md5" => Ok(HashAlgorithm::Md5),
            _ => Err(Error::Validation(ValidationError::unknown_algorithm(s))),
        }
    }
}

/// Result of hash calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    /// Raw digest bytes
    pub digest: Vec<u8>,
    /// Uppercase hex rendering of `digest`
    pub hash: String,
    pub input_size: u64,
    pub duration: Duration,
}

impl HashResult {
    fn new(algorithm: HashAlgorithm, digest: Vec<u8>, input_size: u64, start: Instant) -> Self {
        Self {
            hash: algorithm.render(&digest),
            algorithm,
            digest,
            input_size,
            duration: start.elapsed(),
        }
    }
}

/// Hash calculator for in-memory data, readers and files
#[derive(Debug, Clone, Default)]
pub struct HashCalculator {
    config: ClientConfig,
}

impl HashCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.chunk_size == 0 {
            return Err(Error::Validation(ValidationError::invalid_parameter(
                "chunk_size",
                "must be greater than 0",
            )));
        }
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Calculate hash for byte data
    pub fn calculate_bytes(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<HashResult> {
        let start = Instant::now();
        let digest = algorithm.compute(data)?;
        log::trace!("{algorithm} over {} bytes", data.len());
        Ok(HashResult::new(algorithm, digest, data.len() as u64, start))
    }

    /// Calculate hash for text under the given encoding (UTF-8 when `None`)
    pub fn calculate_text(
        &self,
        algorithm: HashAlgorithm,
        text: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<HashResult> {
        let encoding = encoding.unwrap_or_default();
        let bytes = encoding.encode(text)?;
        log::trace!("Encoded {} chars as {encoding} ({} bytes)", text.chars().count(), bytes.len());
        self.calculate_bytes(algorithm, &bytes)
    }

    /// Calculate several hashes over the same data
    pub fn calculate_multiple(
        &self,
        data: &[u8],
        algorithms: &[HashAlgorithm],
    ) -> Result<HashMap<HashAlgorithm, HashResult>> {
        algorithms
            .iter()
            .map(|&algorithm| {
                self.calculate_bytes(algorithm, data)
                    .map(|result| (algorithm, result))
            })
            .collect()
    }

    /// Calculate hash for everything a reader yields, in `chunk_size` pieces
    pub fn calculate_reader<R: Read>(
        &self,
        algorithm: HashAlgorithm,
        mut reader: R,
    ) -> Result<HashResult> {
        let start = Instant::now();
        let mut hasher = algorithm.hasher()?;
        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut total = 0u64;

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            hasher.update(&buffer[..read]);
            total += read as u64;
        }

        log::debug!("{algorithm} over {total} bytes from reader");
        Ok(HashResult::new(algorithm, hasher.finalize(), total, start))
    }

    /// Calculate hash for a file, reading it in `chunk_size` pieces
    pub async fn calculate_file(
        &self,
        file_path: &Path,
        algorithm: HashAlgorithm,
    ) -> Result<HashResult> {
        let start = Instant::now();
        if !file_path.exists() {
            return Err(Error::Io(IoError::file_not_found(file_path)));
        }

        let mut file = tokio::fs::File::open(file_path)
            .await
            .map_err(|e| IoError::from_std(e).with_path(file_path))?;
        let mut hasher = algorithm.hasher()?;
        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut total = 0u64;

        loop {
            let read = file
                .read(&mut buffer)
                .await
                .map_err(|e| IoError::from_std(e).with_path(file_path))?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
            total += read as u64;
        }

        log::debug!("{algorithm} over {total} bytes from {}", file_path.display());
        Ok(HashResult::new(algorithm, hasher.finalize(), total, start))
    }
}
