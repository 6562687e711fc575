//! Name-keyed registry of digest primitives

use super::traits::DigestPrimitive;
use crate::{Error, Result, error::InternalError};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Maps primitive names (`"SHA-256"`, `"SHA-512"`, `"MD5"`) to implementations
pub struct PrimitiveRegistry {
    primitives: RwLock<HashMap<&'static str, Arc<dyn DigestPrimitive>>>,
}

impl PrimitiveRegistry {
    /// Create a registry with nothing registered
    pub fn empty() -> Self {
        Self {
            primitives: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry holding every built-in primitive
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        super::algorithms::register_all(&registry);
        registry
    }

    /// Get the process-wide registry, built on first use
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<PrimitiveRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            let registry = Self::with_builtins();
            log::debug!("Digest primitives registered: {:?}", registry.names());
            registry
        })
    }

    /// Register a primitive under its own name, replacing any previous one
    pub fn register(&self, primitive: impl DigestPrimitive + 'static) {
        let mut primitives = self
            .primitives
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        primitives.insert(primitive.name(), Arc::new(primitive));
    }

    /// Look up a primitive by name.
    ///
    /// A missing name is reported as [`InternalError::PrimitiveUnavailable`].
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn DigestPrimitive>> {
        let primitives = self
            .primitives
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        primitives.get(name).cloned().ok_or_else(|| {
            log::error!("Digest primitive '{name}' is not registered");
            Error::Internal(InternalError::primitive_unavailable(name))
        })
    }

    /// Sorted names of all registered primitives
    pub fn names(&self) -> Vec<&'static str> {
        let primitives = self
            .primitives
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<_> = primitives.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for PrimitiveRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimitiveRegistry")
            .field("primitives", &self.names())
            .finish()
    }
}
