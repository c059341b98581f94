//! Response bodies for the HTTP API.

pub mod health;
