use anyhow::Result;
use std::collections::{BTreeMap, HashMap};

use crate::scoring::Criterion;

/// Messages shown for failed criteria, keyed by criterion.
///
/// The engine only ever deals in criterion keys; swapping the catalog is how
/// tips are localized.
#[derive(Debug, Clone, PartialEq)]
pub struct TipCatalog {
    messages: HashMap<Criterion, String>,
}

impl Default for TipCatalog {
    fn default() -> Self {
        let messages = [
            (Criterion::SubjectDefined, "Subject is not defined"),
            (Criterion::SubjectInTitle, "Subject is not in the title"),
            (
                Criterion::SubjectInFirstParagraph,
                "Subject is not present in the first paragraph of the content of this page",
            ),
            (Criterion::SubjectInUrl, "Subject is not present in the URL"),
            (
                Criterion::SubjectInMetaDescription,
                "Subject is not present in the meta description of the page",
            ),
            (Criterion::SubjectInImageAltTags, "Subject is not present in image alt tags"),
            (
                Criterion::NumWordsContentOk,
                "The content of this page is too short and does not have enough words. \
                 Please create content of at least 300 words based on the Page subject.",
            ),
            (
                Criterion::MetaTitleLengthOk,
                "The metatitle of the page should have a length of between 10 and 70 characters.",
            ),
            (
                Criterion::ContentHasLinks,
                "The content of this page does not have any (outgoing) links.",
            ),
            (Criterion::ContentHasImages, "The content of this page does not have any images."),
            (
                Criterion::ContentHasSubtitles,
                "The content of this page does not have any subtitles",
            ),
            (Criterion::ImagesHaveAltTags, "All images on this page do not have alt tags"),
            (Criterion::ImagesHaveTitleTags, "All images on this page do not have title tags"),
        ]
        .into_iter()
        .map(|(criterion, message)| (criterion, message.to_string()))
        .collect();

        Self { messages }
    }
}

impl TipCatalog {
    /// Build a catalog from scratch. Criteria without a message produce no tip.
    pub fn from_messages(messages: HashMap<Criterion, String>) -> Self {
        Self { messages }
    }

    /// Replace the default messages for the keys present in `overrides`.
    /// Keys are criterion keys as they appear in config files.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self> {
        for (key, message) in overrides {
            let criterion = Criterion::from_key(key)?;
            self.messages.insert(criterion, message.clone());
        }
        Ok(self)
    }

    pub fn message(&self, criterion: Criterion) -> Option<&str> {
        self.messages.get(&criterion).map(String::as_str)
    }
}
