//! Userstamps: acting-user stamps for persisted records.
//!
//! This crate attaches "created by", "updated by" and "deleted by" stamps to
//! record types managed by a host persistence layer. The host raises
//! lifecycle events and knows who is authenticated; this crate decides
//! whether and how to stamp in response.
//!
//! # Architecture
//!
//! Userstamps follows hexagonal architecture principles:
//!
//! - **Domain**: Column resolution, actor identifiers and record attributes
//! - **Ports**: The host's actor provider, event registry and model capability
//! - **Adapters**: In-memory implementations of the host ports
//!
//! # Modules
//!
//! - [`stamping`]: Stamping policy, registration and relationship accessors

pub mod stamping;
