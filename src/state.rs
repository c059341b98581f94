//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::mapping::{ExclusionSource, SiteResolver, UriMapping};
use crate::domain::repositories::VanityRepository;

#[derive(Clone)]
pub struct AppState {
    pub mapper: Arc<dyn UriMapping>,
    pub sites: Arc<SiteResolver>,
    pub repository: Arc<dyn VanityRepository>,
    pub exclusions: Arc<dyn ExclusionSource>,
    /// Prefix vanity paths are served under; empty for `/`.
    pub context_path: String,
}

impl AppState {
    pub fn new(
        mapper: Arc<dyn UriMapping>,
        sites: Arc<SiteResolver>,
        repository: Arc<dyn VanityRepository>,
        exclusions: Arc<dyn ExclusionSource>,
        context_path: impl Into<String>,
    ) -> Self {
        Self {
            mapper,
            sites,
            repository,
            exclusions,
            context_path: context_path.into(),
        }
    }
}
