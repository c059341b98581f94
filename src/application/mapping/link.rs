//! Link classification and internal link generation.

use url::Url;

/// Opaque schemes whose links are handed out verbatim.
const OPAQUE_EXTERNAL_SCHEMES: &[&str] = &["mailto", "tel", "sms"];

/// Schemes never used as a redirect target.
const REJECTED_SCHEMES: &[&str] = &["javascript", "data", "vbscript", "file"];

/// Classification of a stored link value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Empty or whitespace-only.
    Empty,
    /// Scheme-qualified or protocol-relative URL, used verbatim.
    External,
    /// Content path resolved through a [`LinkResolver`].
    Internal,
    /// Scheme that must not be redirected to.
    Rejected,
}

impl LinkKind {
    /// Classifies a link value.
    ///
    /// | Link                          | Kind       |
    /// |-------------------------------|------------|
    /// | `""`, `"  "`                  | `Empty`    |
    /// | `//cdn.example.com/a`         | `External` |
    /// | `https://example.com/landing` | `External` |
    /// | `ftp://files.example.com/x`   | `External` |
    /// | `mailto:info@example.com`     | `External` |
    /// | `javascript:alert(1)`         | `Rejected` |
    /// | `urn:isbn:123`                | `Rejected` |
    /// | `/en/campaign`, `en/campaign` | `Internal` |
    pub fn classify(link: &str) -> Self {
        let link = link.trim();

        if link.is_empty() {
            return LinkKind::Empty;
        }

        if link.starts_with("//") {
            return LinkKind::External;
        }

        let Some(scheme) = scheme_of(link) else {
            return LinkKind::Internal;
        };
        let scheme = scheme.to_ascii_lowercase();

        if REJECTED_SCHEMES.contains(&scheme.as_str()) {
            return LinkKind::Rejected;
        }

        if OPAQUE_EXTERNAL_SCHEMES.contains(&scheme.as_str()) {
            return LinkKind::External;
        }

        let hierarchical = link[scheme.len() + 1..].starts_with("//");
        if hierarchical && Url::parse(link).is_ok() {
            LinkKind::External
        } else {
            LinkKind::Rejected
        }
    }
}

/// Returns the URI scheme of `link`, if it starts with one.
fn scheme_of(link: &str) -> Option<&str> {
    let colon = link.find(':')?;
    let candidate = &link[..colon];

    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(candidate)
    } else {
        None
    }
}

/// Turns an internal content path into a context-relative URL.
#[cfg_attr(test, mockall::automock)]
pub trait LinkResolver: Send + Sync {
    /// Returns `None` when the content path cannot be linked.
    fn link(&self, content_path: &str) -> Option<String>;
}

/// Default [`LinkResolver`]: prefixes the context path and optionally
/// appends a file extension to the last path segment.
///
/// ```ignore
/// let resolver = ContentLinkResolver::new("/site", Some("html"));
/// assert_eq!(resolver.link("/en/campaign?x=1").unwrap(), "/site/en/campaign.html?x=1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentLinkResolver {
    context_path: String,
    extension: Option<String>,
}

impl ContentLinkResolver {
    pub fn new(context_path: impl Into<String>, extension: Option<&str>) -> Self {
        Self {
            context_path: context_path.into(),
            extension: extension
                .map(|e| e.trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty()),
        }
    }
}

impl LinkResolver for ContentLinkResolver {
    fn link(&self, content_path: &str) -> Option<String> {
        let content_path = content_path.trim();
        if content_path.is_empty() {
            return None;
        }

        let split = content_path.find(['?', '#']).unwrap_or(content_path.len());
        let (path, suffix) = content_path.split_at(split);

        let mut out = String::with_capacity(self.context_path.len() + content_path.len() + 8);
        out.push_str(&self.context_path);
        if !path.starts_with('/') {
            out.push('/');
        }
        out.push_str(path);

        if let Some(ext) = &self.extension {
            let last_segment = path.rsplit('/').next().unwrap_or_default();
            if !last_segment.is_empty() && !last_segment.contains('.') {
                out.push('.');
                out.push_str(ext);
            }
        }

        out.push_str(suffix);
        Some(out)
    }
}

/// Removes a leading context path from `url`.
///
/// Only strips on a path boundary: `/ctx/page` loses `/ctx`, `/ctxpage` does not.
/// A URL equal to the context path becomes `/`.
pub fn strip_context_path(url: &str, context_path: &str) -> String {
    if context_path.is_empty() {
        return url.to_string();
    }

    match url.strip_prefix(context_path) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with(['/', '?', '#']) => {
            if rest.starts_with('/') {
                rest.to_string()
            } else {
                format!("/{rest}")
            }
        }
        _ => url.to_string(),
    }
}
