//! Step definitions for user stamping behaviour tests.

pub mod then;
pub mod world;
