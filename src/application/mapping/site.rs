//! Site scoping for vanity lookups.

use axum::http::HeaderMap;
use std::collections::HashMap;

use crate::utils::host::{host_from_headers, strip_port};

pub use crate::domain::entities::DEFAULT_SITE;

/// Per-request site context, passed explicitly to the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    site_name: String,
}

impl SiteContext {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(DEFAULT_SITE)
    }
}

/// Resolves the site of a request from its host name.
#[derive(Debug, Clone, Default)]
pub struct SiteResolver {
    hosts: HashMap<String, String>,
}

impl SiteResolver {
    /// Creates a resolver from `host → site` pairs. Hosts are matched
    /// case-insensitively and without port.
    pub fn new<I, K, V>(hosts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|(host, site)| (strip_port(host.as_ref().trim()).to_ascii_lowercase(), site.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Site for a host name; unknown or missing hosts map to [`DEFAULT_SITE`].
    pub fn resolve_host(&self, host: Option<&str>) -> SiteContext {
        host.map(|h| strip_port(h.trim()).to_ascii_lowercase())
            .and_then(|h| self.hosts.get(&h))
            .filter(|site| !site.is_empty())
            .map(SiteContext::new)
            .unwrap_or_default()
    }

    /// Site for the request carrying `headers`.
    pub fn resolve(&self, headers: &HeaderMap) -> SiteContext {
        self.resolve_host(host_from_headers(headers).as_deref())
    }
}
