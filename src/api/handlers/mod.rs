//! HTTP request handlers.

pub mod health;
pub mod vanity;

pub use health::health_handler;
pub use vanity::vanity_handler;
