//! Request helpers.
//!
//! - [`host`] - Host extraction from HTTP headers

pub mod host;
