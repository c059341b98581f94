//! Vanity URL entity representing a site-scoped short path and its target.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site a record belongs to when none is given, and the site of requests
/// from unmapped hosts.
pub const DEFAULT_SITE: &str = "default";

/// How the dispatcher should answer once a record matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectKind {
    /// Temporary redirect (`302 Found`).
    #[default]
    Redirect,
    /// Permanent redirect (`301 Moved Permanently`).
    Permanent,
}

impl RedirectKind {
    /// Marker prefixed to the resolved target so the dispatcher issues
    /// an HTTP redirect instead of serving content.
    pub fn marker(self) -> &'static str {
        match self {
            RedirectKind::Redirect => "redirect:",
            RedirectKind::Permanent => "permanent:",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RedirectKind::Redirect => "redirect",
            RedirectKind::Permanent => "permanent",
        }
    }
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored redirect kind is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("Unknown redirect kind: {0}")]
pub struct UnknownRedirectKind(pub String);

impl FromStr for RedirectKind {
    type Err = UnknownRedirectKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "redirect" | "302" => Ok(RedirectKind::Redirect),
            "permanent" | "301" => Ok(RedirectKind::Permanent),
            other => Err(UnknownRedirectKind(other.to_string())),
        }
    }
}

/// A vanity URL record.
///
/// Records are read-only from the mapper's point of view. Uniqueness of
/// `(vanity_url, site)` is not enforced; the lowest `id` wins on lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityRecord {
    pub id: i64,
    pub vanity_url: String,
    pub site: String,
    /// Internal content path or absolute external URL. May be empty.
    pub link: String,
    pub redirect_kind: RedirectKind,
    pub created_at: DateTime<Utc>,
}

impl VanityRecord {
    /// Creates a new VanityRecord instance.
    pub fn new(
        id: i64,
        vanity_url: String,
        site: String,
        link: String,
        redirect_kind: RedirectKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            vanity_url,
            site,
            link,
            redirect_kind,
            created_at,
        }
    }
}

/// Input data for seeding a new record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewVanityRecord {
    pub vanity_url: String,
    #[serde(default = "default_site")]
    pub site: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub redirect_kind: RedirectKind,
}

fn default_site() -> String {
    DEFAULT_SITE.to_string()
}
