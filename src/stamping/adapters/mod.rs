//! Adapter implementations for user stamping ports.

pub mod memory;
