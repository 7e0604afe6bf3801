//! In-memory actor providers.

use crate::stamping::{domain::ActorId, ports::ActorProvider};
use std::sync::{PoisonError, RwLock};

/// Actor provider that always reports the same actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticActor(Option<ActorId>);

impl StaticActor {
    /// Reports `actor` as the acting user.
    #[must_use]
    pub fn new(actor: impl Into<ActorId>) -> Self {
        Self(Some(actor.into()))
    }

    /// Reports that nobody is authenticated.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }
}

impl ActorProvider for StaticActor {
    fn current_actor_id(&self) -> Option<ActorId> {
        self.0.clone()
    }
}

/// Thread-safe actor provider whose acting user can change over time.
///
/// Stands in for a host session guard: callers log an actor in and out
/// between operations.
#[derive(Debug, Default)]
pub struct SessionActor {
    current: RwLock<Option<ActorId>>,
}

impl SessionActor {
    /// Creates a session with nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `actor` the acting user.
    pub fn login(&self, actor: impl Into<ActorId>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(actor.into());
    }

    /// Clears the acting user.
    pub fn logout(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl ActorProvider for SessionActor {
    fn current_actor_id(&self) -> Option<ActorId> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
impl SessionActor {
    /// Panics while holding the write lock, leaving the session poisoned.
    ///
    /// # Panics
    ///
    /// Always.
    pub(crate) fn panic_while_writing(&self) {
        let _guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        panic!("session writer panicked");
    }

    /// Returns `true` once a writer has panicked.
    pub(crate) fn is_poisoned(&self) -> bool {
        self.current.is_poisoned()
    }
}
