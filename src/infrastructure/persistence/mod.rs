//! Vanity URL repository implementations.
//!
//! - [`PgVanityRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryVanityRepository`] - In-process store seeded from JSON

pub mod in_memory_vanity_repository;
pub mod pg_vanity_repository;

pub use in_memory_vanity_repository::InMemoryVanityRepository;
pub use pg_vanity_repository::PgVanityRepository;
