//! SHA-256 primitive

use super::DigestHasher;
use crate::hashing::traits::{DigestPrimitive, StreamingHasher};
use sha2::Sha256;

pub struct Sha256Primitive;

impl DigestPrimitive for Sha256Primitive {
    fn name(&self) -> &'static str {
        "SHA-256"
    }

    fn output_len(&self) -> usize {
        32
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(DigestHasher::<Sha256>::new())
    }
}
