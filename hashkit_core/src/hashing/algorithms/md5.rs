//! MD5 primitive

use super::DigestHasher;
use crate::hashing::traits::{DigestPrimitive, StreamingHasher};
use md5::Md5;

pub struct Md5Primitive;

impl DigestPrimitive for Md5Primitive {
    fn name(&self) -> &'static str {
        "MD5"
    }

    fn output_len(&self) -> usize {
        16
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(DigestHasher::<Md5>::new())
    }
}
