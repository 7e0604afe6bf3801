//! Unit tests for the stamping module.
