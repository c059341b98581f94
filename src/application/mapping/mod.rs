//! Vanity URL mapping core.
//!
//! Request path → [`exclusion`] check → site-scoped lookup → [`link`]
//! resolution → [`mapper::MappingResult`].
//!
//! - [`exclusion`] - Regex rules exempting paths from vanity resolution
//! - [`link`] - External/internal link classification and link generation
//! - [`site`] - Request site context
//! - [`mapper`] - Orchestration and the [`mapper::UriMapping`] seam

pub mod exclusion;
pub mod link;
pub mod mapper;
pub mod site;

pub use exclusion::{
    ExclusionError, ExclusionPolicy, ExclusionSource, ReloadableExclusions, StaticExclusions,
};
pub use link::{ContentLinkResolver, LinkKind, LinkResolver};
pub use mapper::{MappingResult, UriMapping, VanityUriMapper};
pub use site::{DEFAULT_SITE, SiteContext, SiteResolver};
