//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.

pub mod vanity_repository;

pub use vanity_repository::VanityRepository;

#[cfg(test)]
pub use vanity_repository::MockVanityRepository;
