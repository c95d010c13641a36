use serde::{Deserialize, Serialize};

pub const CONTENT_MIN_WORDS: usize = 250;
pub const METATITLE_MIN_LENGTH: usize = 10;
pub const METATITLE_MAX_LENGTH: usize = 70;

/// Thresholds used by the global-mode checks.
///
/// Every field is optional; unset fields use the built-in constants.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   content_min_words: 300
///   metatitle_min_length: 10
///   metatitle_max_length: 60
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Content must have strictly more words than this (default: 250)
    #[serde(default)]
    pub content_min_words: Option<usize>,

    /// Shortest acceptable rendered `<title>`, inclusive (default: 10)
    #[serde(default)]
    pub metatitle_min_length: Option<usize>,

    /// Longest acceptable rendered `<title>`, inclusive (default: 70)
    #[serde(default)]
    pub metatitle_max_length: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            content_min_words: Some(CONTENT_MIN_WORDS),
            metatitle_min_length: Some(METATITLE_MIN_LENGTH),
            metatitle_max_length: Some(METATITLE_MAX_LENGTH),
        }
    }
}

impl ScoringConfig {
    pub fn min_words(&self) -> usize {
        self.content_min_words.unwrap_or(CONTENT_MIN_WORDS)
    }

    pub fn metatitle_range(&self) -> (usize, usize) {
        (
            self.metatitle_min_length.unwrap_or(METATITLE_MIN_LENGTH),
            self.metatitle_max_length.unwrap_or(METATITLE_MAX_LENGTH),
        )
    }
}
