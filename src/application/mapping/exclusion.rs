//! Exclusion rules exempting request paths from vanity resolution.
//!
//! Rules are a name → regular expression map taken from configuration.
//! A path is excluded when it is non-empty and a non-empty pattern matches
//! the *whole* path.

use arc_swap::ArcSwap;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Errors raised by exclusion rule handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExclusionError {
    #[error("Exclude pattern '{name}' is not a valid regular expression: {reason}")]
    InvalidPattern { name: String, reason: String },
}

#[derive(Debug, Clone)]
enum Matcher {
    Empty,
    Compiled(Regex),
    Invalid(String),
}

#[derive(Debug, Clone)]
struct ExclusionRule {
    name: String,
    pattern: String,
    matcher: Matcher,
}

impl ExclusionRule {
    fn new(name: String, pattern: String) -> Self {
        let matcher = if pattern.is_empty() {
            Matcher::Empty
        } else {
            // Anchored so that matching covers the whole path.
            match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(re) => Matcher::Compiled(re),
                Err(e) => Matcher::Invalid(e.to_string()),
            }
        };

        Self {
            name,
            pattern,
            matcher,
        }
    }

    fn invalid_error(&self) -> Option<ExclusionError> {
        match &self.matcher {
            Matcher::Invalid(reason) => Some(ExclusionError::InvalidPattern {
                name: self.name.clone(),
                reason: reason.clone(),
            }),
            _ => None,
        }
    }
}

/// A compiled set of exclusion rules.
///
/// Rules are evaluated in name order. Invalid patterns are retained so that
/// [`ExclusionPolicy::validate`] can report them at configuration time; if one
/// still reaches evaluation, [`ExclusionPolicy::is_candidate`] returns an error
/// instead of a decision.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    rules: Vec<ExclusionRule>,
}

impl ExclusionPolicy {
    /// Builds a policy without validating patterns.
    pub fn new<I, K, V>(patterns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let sorted: BTreeMap<String, String> = patterns
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            rules: sorted
                .into_iter()
                .map(|(name, pattern)| ExclusionRule::new(name, pattern))
                .collect(),
        }
    }

    /// Builds a policy and rejects it if any pattern fails to compile.
    ///
    /// # Errors
    ///
    /// Returns [`ExclusionError::InvalidPattern`] naming the first broken rule.
    pub fn compile<I, K, V>(patterns: I) -> Result<Self, ExclusionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let policy = Self::new(patterns);
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that every pattern compiled.
    pub fn validate(&self) -> Result<(), ExclusionError> {
        match self.rules.iter().find_map(ExclusionRule::invalid_error) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names with their raw patterns, in evaluation order.
    pub fn patterns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules
            .iter()
            .map(|r| (r.name.as_str(), r.pattern.as_str()))
    }

    /// Returns whether `path` is eligible for vanity resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ExclusionError::InvalidPattern`] if evaluation reaches a rule
    /// whose pattern did not compile.
    pub fn is_candidate(&self, path: &str) -> Result<bool, ExclusionError> {
        if path.is_empty() {
            return Ok(true);
        }

        for rule in &self.rules {
            match &rule.matcher {
                Matcher::Empty => {}
                Matcher::Compiled(re) => {
                    if re.is_match(path) {
                        debug!(path, rule = %rule.name, "Path excluded from vanity resolution");
                        return Ok(false);
                    }
                }
                Matcher::Invalid(reason) => {
                    return Err(ExclusionError::InvalidPattern {
                        name: rule.name.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        Ok(true)
    }
}

/// Supplies the exclusion policy in effect for the current request.
pub trait ExclusionSource: Send + Sync {
    fn current(&self) -> Arc<ExclusionPolicy>;
}

/// Fixed exclusion policy.
#[derive(Debug, Clone, Default)]
pub struct StaticExclusions(Arc<ExclusionPolicy>);

impl StaticExclusions {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self(Arc::new(policy))
    }
}

impl ExclusionSource for StaticExclusions {
    fn current(&self) -> Arc<ExclusionPolicy> {
        self.0.clone()
    }
}

/// Exclusion policy that can be swapped while requests are in flight.
///
/// A request keeps the snapshot it loaded for its whole evaluation.
#[derive(Debug)]
pub struct ReloadableExclusions {
    policy: ArcSwap<ExclusionPolicy>,
}

impl ReloadableExclusions {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self {
            policy: ArcSwap::from_pointee(policy),
        }
    }

    /// Replaces the active policy if the new one is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ExclusionError::InvalidPattern`] and keeps the current policy
    /// when any pattern fails to compile.
    pub fn reload(&self, policy: ExclusionPolicy) -> Result<(), ExclusionError> {
        policy.validate()?;
        info!(rules = policy.len(), "Vanity url exclusions reloaded");
        self.policy.store(Arc::new(policy));
        Ok(())
    }
}

impl ExclusionSource for ReloadableExclusions {
    fn current(&self) -> Arc<ExclusionPolicy> {
        self.policy.load_full()
    }
}
