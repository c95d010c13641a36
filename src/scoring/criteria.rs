use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named boolean check contributing to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    SubjectDefined,
    SubjectInTitle,
    SubjectInContent,
    #[serde(rename = "subject_in_firstparagraph")]
    SubjectInFirstParagraph,
    SubjectInUrl,
    #[serde(rename = "subject_in_metadescription")]
    SubjectInMetaDescription,
    SubjectInImageAltTags,
    #[serde(rename = "numwords_content_ok")]
    NumWordsContentOk,
    #[serde(rename = "metatitle_length_ok")]
    MetaTitleLengthOk,
    ContentHasLinks,
    ContentHasImages,
    ContentHasSubtitles,
    ImagesHaveAltTags,
    ImagesHaveTitleTags,
}

/// Scored criteria when a subject is set, in tip order.
pub const SUBJECT_CRITERIA: [Criterion; 7] = [
    Criterion::SubjectDefined,
    Criterion::SubjectInTitle,
    Criterion::SubjectInContent,
    Criterion::SubjectInFirstParagraph,
    Criterion::SubjectInUrl,
    Criterion::SubjectInMetaDescription,
    Criterion::SubjectInImageAltTags,
];

/// Scored criteria without a subject, in tip order.
pub const GLOBAL_CRITERIA: [Criterion; 7] = [
    Criterion::NumWordsContentOk,
    Criterion::MetaTitleLengthOk,
    Criterion::ContentHasLinks,
    Criterion::ContentHasImages,
    Criterion::ContentHasSubtitles,
    Criterion::ImagesHaveAltTags,
    Criterion::ImagesHaveTitleTags,
];

impl Criterion {
    pub const ALL: [Criterion; 14] = [
        Criterion::SubjectDefined,
        Criterion::SubjectInTitle,
        Criterion::SubjectInContent,
        Criterion::SubjectInFirstParagraph,
        Criterion::SubjectInUrl,
        Criterion::SubjectInMetaDescription,
        Criterion::SubjectInImageAltTags,
        Criterion::NumWordsContentOk,
        Criterion::MetaTitleLengthOk,
        Criterion::ContentHasLinks,
        Criterion::ContentHasImages,
        Criterion::ContentHasSubtitles,
        Criterion::ImagesHaveAltTags,
        Criterion::ImagesHaveTitleTags,
    ];

    /// Stable key used in config files, tip catalogs and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::SubjectDefined => "subject_defined",
            Criterion::SubjectInTitle => "subject_in_title",
            Criterion::SubjectInContent => "subject_in_content",
            Criterion::SubjectInFirstParagraph => "subject_in_firstparagraph",
            Criterion::SubjectInUrl => "subject_in_url",
            Criterion::SubjectInMetaDescription => "subject_in_metadescription",
            Criterion::SubjectInImageAltTags => "subject_in_image_alt_tags",
            Criterion::NumWordsContentOk => "numwords_content_ok",
            Criterion::MetaTitleLengthOk => "metatitle_length_ok",
            Criterion::ContentHasLinks => "content_has_links",
            Criterion::ContentHasImages => "content_has_images",
            Criterion::ContentHasSubtitles => "content_has_subtitles",
            Criterion::ImagesHaveAltTags => "images_have_alt_tags",
            Criterion::ImagesHaveTitleTags => "images_have_title_tags",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        match Criterion::ALL.iter().find(|c| c.key() == key.trim()) {
            Some(criterion) => Ok(*criterion),
            None => bail!("Unknown criterion: {}", key),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which criterion set applies to a scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Subject,
    Global,
}

impl ScoringMode {
    /// Subject mode whenever a subject string is present, even if it is only
    /// whitespace (in which case `subject_defined` fails).
    pub fn for_subject(subject: &str) -> Self {
        if subject.is_empty() {
            ScoringMode::Global
        } else {
            ScoringMode::Subject
        }
    }

    pub fn criteria(&self) -> &'static [Criterion] {
        match self {
            ScoringMode::Subject => &SUBJECT_CRITERIA,
            ScoringMode::Global => &GLOBAL_CRITERIA,
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Subject => f.write_str("subject"),
            ScoringMode::Global => f.write_str("global"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for criterion in Criterion::ALL {
            assert_eq!(Criterion::from_key(criterion.key()).unwrap(), criterion);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert!(Criterion::from_key("subject_in_footer").is_err());
    }

    #[test]
    fn test_serde_key_matches_key() {
        let json = serde_json::to_string(&Criterion::SubjectInFirstParagraph).unwrap();
        assert_eq!(json, "\"subject_in_firstparagraph\"");
        let json = serde_json::to_string(&Criterion::NumWordsContentOk).unwrap();
        assert_eq!(json, "\"numwords_content_ok\"");
        let json = serde_json::to_string(&Criterion::ImagesHaveTitleTags).unwrap();
        assert_eq!(json, "\"images_have_title_tags\"");
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(ScoringMode::for_subject(""), ScoringMode::Global);
        assert_eq!(ScoringMode::for_subject("Test"), ScoringMode::Subject);
        assert_eq!(ScoringMode::for_subject("  "), ScoringMode::Subject);
    }

    #[test]
    fn test_criterion_sets_are_disjoint() {
        assert_eq!(ScoringMode::Global.criteria().len(), 7);
        assert_eq!(ScoringMode::Subject.criteria().len(), 7);
        for criterion in ScoringMode::Subject.criteria() {
            assert!(!ScoringMode::Global.criteria().contains(criterion));
        }
    }

    #[test]
    fn test_subject_in_content_follows_title() {
        assert_eq!(SUBJECT_CRITERIA[1], Criterion::SubjectInTitle);
        assert_eq!(SUBJECT_CRITERIA[2], Criterion::SubjectInContent);
        assert!(!GLOBAL_CRITERIA.contains(&Criterion::SubjectInContent));
    }
}
