//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Counts vanity url records
/// 2. **Exclusions**: Verifies every active exclude pattern compiled
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "42 vanity urls" },
///     "exclusions": { "status": "ok", "message": "2 rules" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = check_store(&state).await;
    let exclusions = check_exclusions(&state);

    let all_healthy = store.is_ok() && exclusions.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store, exclusions },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.repository.count().await {
        Ok(count) => CheckStatus::ok(format!("{} vanity urls", count)),
        Err(e) => CheckStatus::error(format!("Store error: {}", e)),
    }
}

fn check_exclusions(state: &AppState) -> CheckStatus {
    let policy = state.exclusions.current();
    match policy.validate() {
        Ok(()) => CheckStatus::ok(format!("{} rules", policy.len())),
        Err(e) => CheckStatus::error(e.to_string()),
    }
}
