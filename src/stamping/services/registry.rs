//! Memoised per-type stamping bindings.

use crate::stamping::{
    domain::{ModelBinding, StampDomainError},
    ports::Stampable,
};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Read-through cache of [`ModelBinding`]s keyed by record type.
///
/// Resolution is pure, so concurrent first lookups for the same type may both
/// resolve; whichever insert lands first is kept and the other result is
/// dropped.
#[derive(Debug, Default)]
pub struct StampingRegistry {
    bindings: RwLock<HashMap<TypeId, Arc<ModelBinding>>>,
}

impl StampingRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the binding for `M`, resolving it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError`] when `M` declares an invalid column
    /// override. Failed resolutions are not cached.
    pub fn binding<M>(&self) -> Result<Arc<ModelBinding>, StampDomainError>
    where
        M: Stampable,
    {
        let key = TypeId::of::<M>();
        if let Some(found) = self
            .bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(found));
        }

        let resolved = Arc::new(ModelBinding::new(
            M::MODEL,
            M::stamp_columns()?,
            M::SOFT_DELETES,
        ));
        let mut bindings = self
            .bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(bindings.entry(key).or_insert(resolved)))
    }

    /// Returns whether `M` supports soft deletion.
    ///
    /// # Errors
    ///
    /// Returns [`StampDomainError`] when `M`'s binding cannot be resolved.
    pub fn is_soft_deletable<M>(&self) -> Result<bool, StampDomainError>
    where
        M: Stampable,
    {
        Ok(self.binding::<M>()?.soft_deletes())
    }

    /// Returns `true` when `M` has already been resolved.
    #[must_use]
    pub fn contains<M>(&self) -> bool
    where
        M: Stampable,
    {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<M>())
    }

    /// Returns the number of resolved types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when no type has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl StampingRegistry {
    /// Panics while holding the write lock, leaving the table poisoned.
    ///
    /// # Panics
    ///
    /// Always.
    pub(crate) fn panic_while_writing(&self) {
        let _guard = self
            .bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        panic!("binding table writer panicked");
    }

    /// Returns `true` once a writer has panicked.
    pub(crate) fn is_poisoned(&self) -> bool {
        self.bindings.is_poisoned()
    }
}
