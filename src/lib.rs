//! # Vanity URL
//!
//! Redirects short, human-memorable paths ("vanity urls") to their configured
//! targets, scoped per site.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The vanity record entity and storage trait
//! - **Application Layer** ([`application`]) - Exclusion rules, link resolution,
//!   site scoping, and the URI mapper
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory stores
//! - **API Layer** ([`api`]) - Redirect and health handlers, tracing middleware
//!
//! ## Request Flow
//!
//! ```text
//! path ─► exclusions ─► lookup(path, site) ─► link resolution ─► 302/301 or 404
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! echo '[{"vanity_url": "/promo", "link": "https://example.com/landing"}]' > records.json
//! export VANITY_RECORDS_FILE=records.json
//! export VANITY_EXCLUDES='{"assets": "/assets/.*"}'
//! cargo run
//! curl -i localhost:3000/promo
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::mapping::{
        ContentLinkResolver, ExclusionPolicy, LinkResolver, MappingResult, SiteContext,
        SiteResolver, StaticExclusions, UriMapping, VanityUriMapper,
    };
    pub use crate::domain::entities::{NewVanityRecord, RedirectKind, VanityRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
