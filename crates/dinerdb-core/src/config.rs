// crates/dinerdb-core/src/config.rs
use crate::error::Result;
use crate::keywords::KeywordChecker;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Tunables shared by every store.
///
/// Missing fields in a JSON config fall back to the defaults, so `{}` is a
/// valid configuration.
///
/// ```rust
/// use dinerdb_core::StoreConfig;
///
/// let cfg = StoreConfig::from_reader(r#"{ "top_k": 3 }"#.as_bytes()).unwrap();
/// assert_eq!(cfg.top_k, 3);
/// assert_eq!(cfg.keyword_top_k, 5);
/// assert!(cfg.vocabulary.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Length limit of count and rating rankings.
    pub top_k: usize,
    /// Length limit of keyword rankings.
    pub keyword_top_k: usize,
    /// Replaces the built-in sentiment vocabulary when set.
    pub vocabulary: Option<Vec<String>>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            top_k: 20,
            keyword_top_k: 5,
            vocabulary: None,
        }
    }
}

impl StoreConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Checker for keyword mining: the configured vocabulary, or the shared
    /// built-in one.
    pub fn keyword_checker(&self) -> Cow<'static, KeywordChecker> {
        match &self.vocabulary {
            Some(words) => Cow::Owned(KeywordChecker::new(words.iter().cloned())),
            None => Cow::Borrowed(KeywordChecker::sentiment()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = StoreConfig::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(cfg, StoreConfig::default());
    }

    #[test]
    fn custom_vocabulary_replaces_builtin() {
        let cfg = StoreConfig {
            vocabulary: Some(vec!["food".into()]),
            ..StoreConfig::default()
        };
        let checker = cfg.keyword_checker();
        assert!(checker.is_keyword("food"));
        assert!(!checker.is_keyword("excellent"));
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(StoreConfig::from_reader("{ top_k: ".as_bytes()).is_err());
    }
}
