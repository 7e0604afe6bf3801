//! Domain model for user stamping.
//!
//! The domain describes which columns a record type stamps, what an actor
//! identifier looks like, and how a record instance holds its attributes.
//! Host persistence concerns are kept outside the domain boundary.

mod binding;
mod columns;
mod error;
mod event;
mod ids;
mod outcome;
mod record;
mod relation;

pub use binding::ModelBinding;
pub use columns::{ColumnName, ColumnOverride, StampColumn, StampColumns};
pub use error::{ParseLifecycleEventError, StampDomainError};
pub use event::LifecycleEvent;
pub use ids::ActorId;
pub use outcome::{SkipReason, StampOutcome};
pub use record::Record;
pub use relation::{BelongsTo, UserModel};
