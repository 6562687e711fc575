//! Digest primitive implementations

use super::registry::PrimitiveRegistry;
use super::traits::StreamingHasher;
use sha2::Digest;

pub(crate) mod crc32;
mod md5;
mod sha256;
mod sha512;

/// Register all built-in primitives with the registry
pub(crate) fn register_all(registry: &PrimitiveRegistry) {
    registry.register(sha256::Sha256Primitive);
    registry.register(sha512::Sha512Primitive);
    registry.register(md5::Md5Primitive);
}

/// Streaming adapter over a RustCrypto [`Digest`] implementation
struct DigestHasher<D> {
    hasher: D,
}

impl<D: Digest> DigestHasher<D> {
    fn new() -> Self {
        Self { hasher: D::new() }
    }
}

impl<D: Digest + Send> StreamingHasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.hasher).to_vec()
    }
}
