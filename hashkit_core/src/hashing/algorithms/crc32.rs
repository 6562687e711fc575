//! CRC-32 checksum
//!
//! Every computation owns its own accumulator, so there is no state to reset
//! between calls and nothing to lock when threads share a variant.

use crate::formatter::minimal_be_bytes;
use crate::hashing::traits::StreamingHasher;
use crc32fast::Hasher as Crc32Hasher;

/// Checksum `data` with a fresh accumulator
pub(crate) fn checksum(data: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// CRC-32 streaming hasher producing minimal big-endian bytes
pub(crate) struct Crc32StreamingHasher {
    hasher: Crc32Hasher,
}

impl Crc32StreamingHasher {
    pub(crate) fn new() -> Self {
        Self {
            hasher: Crc32Hasher::new(),
        }
    }
}

impl StreamingHasher for Crc32StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        minimal_be_bytes(self.hasher.finalize())
    }
}
