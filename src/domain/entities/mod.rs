//! Core domain entities.
//!
//! - [`VanityRecord`] - A stored vanity URL and its target link
//! - [`NewVanityRecord`] - Input for seeding records
//! - [`RedirectKind`] - Temporary or permanent redirect

pub mod vanity_url;

pub use vanity_url::{
    DEFAULT_SITE, NewVanityRecord, RedirectKind, UnknownRedirectKind, VanityRecord,
};
