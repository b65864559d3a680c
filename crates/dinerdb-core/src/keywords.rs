// crates/dinerdb-core/src/keywords.rs

//! Keyword classifier backed by a sorted vocabulary.

use once_cell::sync::Lazy;

/// Built-in sentiment vocabulary, alphabetically sorted.
pub const SENTIMENT_VOCABULARY: &[&str] = &[
    "agreeable",
    "air-headed",
    "apocalypse",
    "appetizing",
    "average",
    "awesome",
    "biohazard",
    "bland",
    "bleh",
    "burnt",
    "charming",
    "clueless",
    "cockroach",
    "cold",
    "crap",
    "dancing",
    "dead",
    "decadent",
    "decent",
    "dirty",
    "disgusting",
    "dreadful",
    "droppings",
    "dry",
    "dumpy",
    "excellent",
    "favourite",
    "feel-good",
    "flavourful",
    "frozen",
    "gem",
    "gross",
    "heart",
    "heavenly",
    "horrendous",
    "horrible",
    "incredible",
    "interesting",
    "lame",
    "lousy",
    "mediocre",
    "meh",
    "mess",
    "microwaved",
    "mouth-watering",
    "nightmares",
    "ok",
    "okay",
    "overcooked",
    "overhyped",
    "perfection",
    "polite",
    "prompt",
    "quality",
    "rude",
    "satisfaction",
    "savoury",
    "sewer",
    "singing",
    "slow",
    "so-so",
    "spongy",
    "sticky",
    "sublime",
    "succulent",
    "sucked",
    "surprised",
    "terrible",
    "tingling",
    "tired",
    "toxic",
    "traumatizing",
    "uncomfortable",
    "under-seasoned",
    "undercooked",
    "unique",
    "unprofessional",
    "waste",
    "worst",
    "yuck",
    "yummy",
];

static SENTIMENT: Lazy<KeywordChecker> =
    Lazy::new(|| KeywordChecker::new(SENTIMENT_VOCABULARY.iter().copied()));

/// Membership test against a sorted vocabulary, O(log V) per lookup.
///
/// ```rust
/// use dinerdb_core::keywords::KeywordChecker;
///
/// let checker = KeywordChecker::sentiment();
/// assert!(checker.is_keyword("excellent"));
/// assert!(!checker.is_keyword("food"));
///
/// let custom = KeywordChecker::new(["tasty", "food"]);
/// assert!(custom.is_keyword("food"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordChecker {
    words: Vec<String>,
}

impl KeywordChecker {
    /// Builds a checker; the words are sorted and deduplicated here.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();
        KeywordChecker { words }
    }

    /// Shared checker over [`SENTIMENT_VOCABULARY`], built once per process.
    pub fn sentiment() -> &'static KeywordChecker {
        &SENTIMENT
    }

    /// Exact, case-sensitive membership.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordChecker {
    fn default() -> Self {
        KeywordChecker::sentiment().clone()
    }
}
