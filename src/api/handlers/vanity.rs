//! Handler dispatching vanity URL redirects.

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::borrow::Cow;
use tracing::{debug, error};

use crate::domain::entities::RedirectKind;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a vanity path to its configured target.
///
/// # Endpoint
///
/// `GET {context_path}/{*path}` (router fallback)
///
/// # Request Flow
///
/// 1. Resolve the site from the `Host` header
/// 2. Strip the context path and percent-decode the rest
/// 3. Ask the mapper for a mapping (exclusions, lookup, link resolution)
/// 4. Answer with the redirect the target's marker asks for
///
/// # Responses
///
/// - **302 Found**: `redirect:` target
/// - **301 Moved Permanently**: `permanent:` target
/// - **404 Not Found**: no mapping for this path and site
pub async fn vanity_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let site = state.sites.resolve(&headers);

    let Some(path) = within_context_path(uri.path(), &state.context_path) else {
        debug!(path = uri.path(), "Request outside the context path");
        return Err(AppError::not_found(
            "No vanity url mapping",
            json!({ "path": uri.path(), "site": site.site_name() }),
        ));
    };
    let path = decode_path(path);

    let Some(mapping) = state.mapper.map_uri(&path, uri.query(), &site).await else {
        debug!(path = %path, site = site.site_name(), "No vanity url mapping");
        return Err(AppError::not_found(
            "No vanity url mapping",
            json!({ "path": path, "site": site.site_name() }),
        ));
    };

    let Some((kind, location)) = mapping.redirect() else {
        error!(target_uri = %mapping.to_uri, "Mapping target has no redirect marker");
        return Err(AppError::internal("Unsupported mapping target", json!({})));
    };

    let location = HeaderValue::from_str(location).map_err(|_| {
        error!(location, "Redirect location is not a valid header value");
        AppError::internal("Invalid redirect location", json!({}))
    })?;

    let status = match kind {
        RedirectKind::Redirect => StatusCode::FOUND,
        RedirectKind::Permanent => StatusCode::MOVED_PERMANENTLY,
    };

    Ok((status, [(header::LOCATION, location)]).into_response())
}

/// Returns the part of `path` below `context_path`.
///
/// `{context_path}` and `{context_path}/` both yield `/`. Paths that only share
/// a name prefix with the context path (`/sitemap` under `/site`) yield `None`.
fn within_context_path<'a>(path: &'a str, context_path: &str) -> Option<&'a str> {
    if context_path.is_empty() {
        return Some(path);
    }

    match path.strip_prefix(context_path)? {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Percent-decodes a request path, keeping the raw path if it is not UTF-8.
fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}
