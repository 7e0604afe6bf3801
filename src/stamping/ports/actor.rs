//! Actor provider port.

use crate::stamping::domain::ActorId;

/// Source of the currently authenticated actor.
///
/// Injected into the stamping policy in place of a global authentication
/// facade and read on every handler call.
#[cfg_attr(test, mockall::automock)]
pub trait ActorProvider: Send + Sync {
    /// Returns the acting user's identifier, or `None` when nobody is
    /// authenticated.
    fn current_actor_id(&self) -> Option<ActorId>;
}
