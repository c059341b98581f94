//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                 - Health check: store and exclusions
//! - `GET {context_path}{/path}`   - Vanity url redirect (fallback)
//!
//! Only `GET` and `HEAD` are dispatched to the vanity handler; other
//! methods receive `405 Method Not Allowed`.

use crate::api::handlers::{health_handler, vanity_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router.
///
/// Every path other than `/health` reaches the vanity handler, which strips
/// `state.context_path` itself so `{context_path}` and `{context_path}/` both
/// map to `/`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(get(vanity_handler))
        .with_state(state)
        .layer(tracing::layer())
}
