//! Port contracts for user stamping.
//!
//! Ports define the interfaces the stamping layer consumes from its host:
//! who is acting, what a stampable record looks like, and where lifecycle
//! listeners and global scopes are registered.

pub mod actor;
pub mod config;
pub mod events;
pub mod model;

pub use actor::ActorProvider;
#[cfg(test)]
pub use actor::MockActorProvider;
pub use config::{ConfigError, StampingConfig};
pub use events::{GlobalScope, Listener, ModelEvents};
pub use model::Stampable;
