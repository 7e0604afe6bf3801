//! User stamping for persisted records.
//!
//! Stamps records with the acting user when the host persistence layer
//! creates, updates, soft-deletes or restores them. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Policy and registration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
