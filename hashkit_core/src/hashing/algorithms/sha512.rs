//! SHA-512 primitive

use super::DigestHasher;
use crate::hashing::traits::{DigestPrimitive, StreamingHasher};
use sha2::Sha512;

pub struct Sha512Primitive;

impl DigestPrimitive for Sha512Primitive {
    fn name(&self) -> &'static str {
        "SHA-512"
    }

    fn output_len(&self) -> usize {
        64
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(DigestHasher::<Sha512>::new())
    }
}
