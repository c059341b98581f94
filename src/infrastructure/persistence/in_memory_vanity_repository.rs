//! In-process vanity URL repository.
//!
//! Backs database-less deployments (seeded from a JSON file) and tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::path::Path;
use std::sync::RwLock;

use crate::domain::entities::{NewVanityRecord, VanityRecord};
use crate::domain::repositories::VanityRepository;
use crate::error::AppError;

/// Vanity URL store held in memory. Ids are assigned in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryVanityRepository {
    records: RwLock<Vec<VanityRecord>>,
}

impl InMemoryVanityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`, numbered from 1 in order.
    pub fn with_records(records: impl IntoIterator<Item = NewVanityRecord>) -> Self {
        let now = Utc::now();
        let records = records
            .into_iter()
            .zip(1..)
            .map(|(r, id)| {
                VanityRecord::new(id, r.vanity_url, r.site, r.link, r.redirect_kind, now)
            })
            .collect();

        Self {
            records: RwLock::new(records),
        }
    }

    /// Loads records from a JSON array file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a JSON array of records.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vanity records from {}", path.display()))?;
        let records: Vec<NewVanityRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid vanity records in {}", path.display()))?;

        Ok(Self::with_records(records))
    }

    fn poisoned() -> AppError {
        AppError::internal("Vanity store lock poisoned", json!({}))
    }
}

#[async_trait]
impl VanityRepository for InMemoryVanityRepository {
    async fn find_first(
        &self,
        vanity_url: &str,
        site: &str,
    ) -> Result<Option<VanityRecord>, AppError> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;

        Ok(records
            .iter()
            .filter(|r| r.vanity_url == vanity_url && r.site == site)
            .min_by_key(|r| r.id)
            .cloned())
    }

    async fn insert(&self, new_record: NewVanityRecord) -> Result<VanityRecord, AppError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = VanityRecord::new(
            id,
            new_record.vanity_url,
            new_record.site,
            new_record.link,
            new_record.redirect_kind,
            Utc::now(),
        );
        records.push(record.clone());

        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records.len() as i64)
    }
}
