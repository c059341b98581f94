//! Host extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Extracts the host name from the `Host` header.
///
/// Handles IPv4 addresses, bracketed IPv6 addresses, and host names with or
/// without a port. The port is stripped and the result lowercased.
///
/// Returns `None` if the header is missing, not valid UTF-8, or empty.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "Shop.Example.com:8080".parse().unwrap());
///
/// assert_eq!(host_from_headers(&headers).unwrap(), "shop.example.com");
/// ```
pub fn host_from_headers(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?.trim();
    if host.is_empty() {
        return None;
    }

    Some(strip_port(host).to_ascii_lowercase())
}

/// Strips a trailing `:port` from a host value.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    }
}
