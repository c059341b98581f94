//! Repository trait for vanity URL lookups.

use crate::domain::entities::{NewVanityRecord, VanityRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Record store backing the vanity URL mapper.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVanityRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryVanityRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VanityRepository: Send + Sync {
    /// Finds the first record matching `vanity_url` and `site` exactly.
    ///
    /// When several records match, the one with the lowest `id` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_first(
        &self,
        vanity_url: &str,
        site: &str,
    ) -> Result<Option<VanityRecord>, AppError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_record: NewVanityRecord) -> Result<VanityRecord, AppError>;

    /// Counts stored records. Also used as a connectivity probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
