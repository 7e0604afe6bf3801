//! Stamping services.
//!
//! - [`UserStampPolicy`]: the four lifecycle handlers
//! - [`StampingRegistry`]: per-type binding cache
//! - [`UserStamps`]: host registration and relationship accessors

pub mod policy;
pub mod registry;
pub mod relations;
pub mod scope;
pub mod user_stamps;

pub use policy::UserStampPolicy;
pub use registry::StampingRegistry;
pub use relations::UserStampRelations;
pub use scope::UserStampsScope;
pub use user_stamps::UserStamps;
