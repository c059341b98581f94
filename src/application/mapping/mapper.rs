//! Vanity URI mapping: exclusion check, site-scoped lookup, link resolution.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::exclusion::ExclusionSource;
use super::link::{LinkKind, LinkResolver, strip_context_path};
use super::site::SiteContext;
use crate::domain::entities::RedirectKind;
use crate::domain::repositories::VanityRepository;

/// Outcome of a successful mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingResult {
    /// Marker-prefixed target, e.g. `redirect:https://example.com/landing`.
    pub to_uri: String,
    /// Specificity: the character length of the mapped request path.
    /// Higher values win when several mappers match.
    pub level: usize,
}

impl MappingResult {
    pub fn new(to_uri: String, level: usize) -> Self {
        Self { to_uri, level }
    }

    /// Splits the target into its redirect kind and location.
    ///
    /// Returns `None` if the target carries no known marker.
    pub fn redirect(&self) -> Option<(RedirectKind, &str)> {
        [RedirectKind::Redirect, RedirectKind::Permanent]
            .into_iter()
            .find_map(|kind| {
                self.to_uri
                    .strip_prefix(kind.marker())
                    .map(|location| (kind, location))
            })
    }
}

/// A URI mapping consulted by the request dispatcher.
///
/// Returning `None` declines the request so other handlers may act.
#[async_trait]
pub trait UriMapping: Send + Sync {
    async fn map_uri(
        &self,
        uri: &str,
        query_string: Option<&str>,
        site: &SiteContext,
    ) -> Option<MappingResult>;
}

/// Maps vanity URLs to their configured targets.
///
/// Stateless across requests apart from the injected collaborators. No error
/// leaves this type: every failure is logged and turned into "no mapping".
pub struct VanityUriMapper {
    repository: Arc<dyn VanityRepository>,
    link_resolver: Arc<dyn LinkResolver>,
    exclusions: Arc<dyn ExclusionSource>,
    context_path: String,
}

impl VanityUriMapper {
    /// Creates a new mapper.
    ///
    /// `context_path` is stripped from internally generated links.
    pub fn new(
        repository: Arc<dyn VanityRepository>,
        link_resolver: Arc<dyn LinkResolver>,
        exclusions: Arc<dyn ExclusionSource>,
        context_path: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            link_resolver,
            exclusions,
            context_path: context_path.into(),
        }
    }

    /// Resolves a vanity path on `site` into a marker-prefixed target.
    ///
    /// Returns `None` when no record matches, the record's link is empty or
    /// unusable, or the store fails.
    pub async fn resolve(&self, vanity_url: &str, site: &str) -> Option<String> {
        let record = match self.repository.find_first(vanity_url, site).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(vanity_url, site, "No vanity url record");
                return None;
            }
            Err(e) => {
                warn!(
                    vanity_url,
                    site,
                    error = %e,
                    details = %e.details(),
                    "Error on querying for vanity url"
                );
                return None;
            }
        };

        let link = record.link.trim();
        let url = match LinkKind::classify(link) {
            LinkKind::Empty => {
                debug!(id = record.id, "Vanity url record has no link");
                return None;
            }
            LinkKind::Rejected => {
                warn!(id = record.id, link, "Vanity url link uses an unsupported scheme");
                return None;
            }
            LinkKind::External => link.to_string(),
            LinkKind::Internal => {
                let Some(linked) = self.link_resolver.link(link) else {
                    debug!(id = record.id, link, "Internal link could not be resolved");
                    return None;
                };
                strip_context_path(&linked, &self.context_path)
            }
        };

        if url.is_empty() {
            return None;
        }

        debug!(vanity_url, site, target = %url, "Vanity url resolved");
        Some(format!("{}{}", record.redirect_kind.marker(), url))
    }
}

#[async_trait]
impl UriMapping for VanityUriMapper {
    async fn map_uri(
        &self,
        uri: &str,
        query_string: Option<&str>,
        site: &SiteContext,
    ) -> Option<MappingResult> {
        let exclusions = self.exclusions.current();
        match exclusions.is_candidate(uri) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                error!(error = %e, "A vanity url exclude pattern is not set correctly");
                return None;
            }
        }

        if uri.is_empty() {
            return None;
        }

        let mut to_uri = self.resolve(uri, site.site_name()).await?;
        if let Some(query) = query_string.filter(|q| !q.trim().is_empty()) {
            to_uri.push('?');
            to_uri.push_str(query);
        }

        Some(MappingResult::new(to_uri, uri.chars().count()))
    }
}
