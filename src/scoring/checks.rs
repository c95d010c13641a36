use regex::RegexBuilder;

use super::config::ScoringConfig;
use super::criteria::Criterion;
use super::slug::url_segment;
use crate::content::ContentBundle;
use crate::html::{self, HtmlDocument, HtmlError};

/// Run the check behind `criterion` against the current bundle.
pub fn evaluate(criterion: Criterion, bundle: &ContentBundle, config: &ScoringConfig) -> bool {
    match criterion {
        Criterion::SubjectDefined => subject_defined(bundle),
        Criterion::SubjectInTitle => subject_in_title(bundle),
        Criterion::SubjectInContent => subject_in_content(bundle),
        Criterion::SubjectInFirstParagraph => subject_in_first_paragraph(bundle),
        Criterion::SubjectInUrl => subject_in_url(bundle),
        Criterion::SubjectInMetaDescription => subject_in_meta_description(bundle),
        Criterion::SubjectInImageAltTags => subject_in_image_alt_tags(bundle),
        Criterion::NumWordsContentOk => num_words_content_ok(bundle, config),
        Criterion::MetaTitleLengthOk => meta_title_length_ok(bundle, config),
        Criterion::ContentHasLinks => content_has(bundle, "a"),
        Criterion::ContentHasImages => content_has(bundle, "img"),
        Criterion::ContentHasSubtitles => content_has(bundle, "h2"),
        Criterion::ImagesHaveAltTags => images_have_attribute(bundle.content(), "alt"),
        Criterion::ImagesHaveTitleTags => images_have_attribute(bundle.page_html(), "title"),
    }
}

/// Case-insensitive literal search. A pattern that fails to compile (e.g.
/// exceeds the size limit) counts as no match.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}

/// Collapse a check's lookup error into a failed check.
fn or_fail(result: Result<bool, HtmlError>, check: &str) -> bool {
    result.unwrap_or_else(|e| {
        tracing::debug!(check, error = %e, "check could not inspect HTML");
        false
    })
}

pub fn subject_defined(bundle: &ContentBundle) -> bool {
    !bundle.subject().trim().is_empty()
}

pub fn subject_in_title(bundle: &ContentBundle) -> bool {
    subject_defined(bundle) && contains_ignore_case(bundle.title(), bundle.subject())
}

pub fn subject_in_meta_description(bundle: &ContentBundle) -> bool {
    subject_defined(bundle) && contains_ignore_case(bundle.meta_description(), bundle.subject())
}

/// Subject in the content outside the first paragraph. Every literal
/// occurrence of the first paragraph's text is cut from the raw markup
/// before searching.
pub fn subject_in_content(bundle: &ContentBundle) -> bool {
    if !subject_defined(bundle) {
        return false;
    }

    let first = html::first_paragraph(bundle.content());
    let remainder = if first.is_empty() {
        bundle.content().to_string()
    } else {
        bundle.content().replace(&first, "")
    };

    contains_ignore_case(&remainder, bundle.subject())
}

pub fn subject_in_first_paragraph(bundle: &ContentBundle) -> bool {
    if !subject_defined(bundle) {
        return false;
    }

    let first = html::first_paragraph(bundle.content());
    !first.trim().is_empty() && contains_ignore_case(&first, bundle.subject())
}

pub fn subject_in_url(bundle: &ContentBundle) -> bool {
    if !subject_defined(bundle) {
        return false;
    }

    let segment = url_segment(bundle.subject());
    !segment.is_empty() && contains_ignore_case(bundle.url(), &segment)
}

/// Every image carries the subject in its alt text. True when there are no
/// images at all.
pub fn subject_in_image_alt_tags(bundle: &ContentBundle) -> bool {
    if !subject_defined(bundle) {
        return false;
    }

    let subject = bundle.subject();
    let result = HtmlDocument::parse(bundle.content()).and_then(|document| {
        let total = document.count("img")?;
        let matching = document
            .count_with_attribute("img", "alt", |alt| contains_ignore_case(alt, subject))?;
        Ok(matching == total)
    });

    or_fail(result, Criterion::SubjectInImageAltTags.key())
}

pub fn num_words_content_ok(bundle: &ContentBundle, config: &ScoringConfig) -> bool {
    html::count_words(&html::plain_text(bundle.content())) > config.min_words()
}

/// Length of the rendered page's `<title>` within the configured range.
pub fn meta_title_length_ok(bundle: &ContentBundle, config: &ScoringConfig) -> bool {
    let (min, max) = config.metatitle_range();
    let result = HtmlDocument::parse(bundle.page_html()).and_then(|document| {
        Ok(document
            .first_text("title")?
            .map(|title| {
                let length = title.chars().count();
                length >= min && length <= max
            })
            .unwrap_or(false))
    });

    or_fail(result, Criterion::MetaTitleLengthOk.key())
}

pub fn content_has(bundle: &ContentBundle, tag: &str) -> bool {
    let result = HtmlDocument::parse(bundle.content())
        .and_then(|document| Ok(document.count(tag)? > 0));
    or_fail(result, tag)
}

/// Every image in `source` has a non-empty `attribute`. True when there are
/// no images at all.
pub fn images_have_attribute(source: &str, attribute: &str) -> bool {
    let result = HtmlDocument::parse(source).and_then(|document| {
        let total = document.count("img")?;
        let covered = document.count_with_attribute("img", attribute, |_| true)?;
        Ok(covered == total)
    });

    or_fail(result, attribute)
}
