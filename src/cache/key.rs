//! Cache key type for page instances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// String key identifying a cacheable page instance.
///
/// Defaults to the matched route's path fragment (for example
/// `profile/42`). The `/` separator is significant: a *flat* key (no
/// separator) names a parameterless route and its whole parametrized
/// subtree, while a *composite* key names one specific instance. Prefix
/// invalidation keys on this distinction.
///
/// # Example
///
/// ```rust
/// use pageflow::cache::CacheKey;
///
/// let flat = CacheKey::from("index");
/// let composite = CacheKey::from("profile/42");
///
/// assert!(!flat.is_composite());
/// assert!(composite.is_composite());
/// assert_eq!(composite.segments(), vec!["profile", "42"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this key names a specific parametrized instance.
    pub fn is_composite(&self) -> bool {
        self.0.contains('/')
    }

    /// The `/`-separated segments of the key.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('/').collect()
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_keys_are_not_composite() {
        assert!(!CacheKey::from("index").is_composite());
        assert!(CacheKey::from("index/123").is_composite());
        assert!(CacheKey::from("index/123/456").is_composite());
    }

    #[test]
    fn segments_split_on_separator() {
        assert_eq!(CacheKey::from("index").segments(), vec!["index"]);
        assert_eq!(
            CacheKey::from("index/123/456").segments(),
            vec!["index", "123", "456"]
        );
    }

    #[test]
    fn key_serializes_as_plain_string() {
        let key = CacheKey::from("profile/42");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"profile/42\"");
        let back: CacheKey = serde_json::from_str("\"profile/42\"").unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn empty_key_is_detectable() {
        assert!(CacheKey::from("").is_empty());
        assert!(!CacheKey::from("index").is_empty());
    }
}
