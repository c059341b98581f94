//! Application layer.
//!
//! Orchestrates domain operations. The [`mapping`] module holds the vanity
//! URL decision logic consumed by HTTP handlers.

pub mod mapping;
