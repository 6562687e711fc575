//! Core traits for named digest primitives

/// A stateless digest primitive looked up by name.
///
/// Each call to [`DigestPrimitive::create_hasher`] returns an independent
/// hasher, so one primitive can serve concurrent callers.
pub trait DigestPrimitive: Send + Sync {
    /// Name the primitive is registered under, e.g. `"SHA-256"`
    fn name(&self) -> &'static str;

    /// Digest length in bytes
    fn output_len(&self) -> usize;

    /// Create a new streaming hasher instance
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Digest an in-memory buffer in one call
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Trait for incremental digest calculation
pub trait StreamingHasher: Send {
    /// Feed more input
    fn update(&mut self, data: &[u8]);

    /// Consume the hasher and return the raw digest bytes
    fn finalize(self: Box<Self>) -> Vec<u8>;
}
