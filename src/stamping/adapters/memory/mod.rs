//! In-memory adapters for tests and embedding without a database.

pub mod actor;
pub mod events;

pub use actor::{SessionActor, StaticActor};
pub use events::{InMemoryModelEvents, InMemoryQuery};
