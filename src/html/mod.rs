//! Tolerant HTML access for the scoring checks.
//!
//! Markup is parsed with html5ever (through `scraper`), which never rejects
//! input: broken or partial markup yields a document with whatever elements
//! could be recovered. Parser complaints are dropped after a trace event.
//! The only hard failure is being asked to parse nothing at all.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}[\p{L}'-]*").expect("valid word regex"));

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph regex"));

/// Elements whose end starts a new paragraph in flattened text.
const BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "div", "section", "article", "header", "footer",
    "blockquote", "pre", "ul", "ol", "li", "dl", "dt", "dd", "table", "tr", "figure",
    "figcaption", "address", "hr",
];

/// Never part of readable text.
const SKIPPED_TAGS: &[&str] = &["head", "script", "style", "template", "noscript"];

#[derive(Debug, Error)]
pub enum HtmlError {
    /// Parsing was requested before any HTML was supplied. This is a caller
    /// bug, not a finding about the content.
    #[error("no HTML content set before conversion to a document")]
    NoContent,

    #[error("invalid element selector '{tag}': {reason}")]
    Selector { tag: String, reason: String },
}

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full document or a body fragment.
    pub fn parse(source: &str) -> Result<Self, HtmlError> {
        if source.is_empty() {
            return Err(HtmlError::NoContent);
        }

        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            tracing::trace!(count = html.errors.len(), "suppressed HTML parse errors");
        }

        Ok(Self { html })
    }

    /// All elements with the given tag name, in document order.
    pub fn elements(&self, tag: &str) -> Result<Vec<ElementRef<'_>>, HtmlError> {
        let selector = Selector::parse(tag).map_err(|e| HtmlError::Selector {
            tag: tag.to_string(),
            reason: format!("{:?}", e),
        })?;

        Ok(self.html.select(&selector).collect())
    }

    pub fn count(&self, tag: &str) -> Result<usize, HtmlError> {
        Ok(self.elements(tag)?.len())
    }

    /// Text content of the first element with the given tag, if any.
    pub fn first_text(&self, tag: &str) -> Result<Option<String>, HtmlError> {
        Ok(self
            .elements(tag)?
            .first()
            .map(|element| element.text().collect::<String>()))
    }

    /// Number of `tag` elements whose `attribute` is present and non-empty
    /// and satisfies `accept`.
    pub fn count_with_attribute<F>(
        &self,
        tag: &str,
        attribute: &str,
        accept: F,
    ) -> Result<usize, HtmlError>
    where
        F: Fn(&str) -> bool,
    {
        Ok(self
            .elements(tag)?
            .iter()
            .filter_map(|element| element.value().attr(attribute))
            .filter(|value| !value.is_empty() && accept(value))
            .count())
    }

    /// Flattened text of the whole document with entities decoded.
    pub fn text(&self) -> String {
        self.html.root_element().text().collect()
    }

    /// Flattened text with a blank line after every block element and a
    /// line break for every `<br>`. Source whitespace is kept as is.
    pub fn block_text(&self) -> String {
        let mut out = String::new();
        push_block_text(self.html.root_element(), &mut out);
        out
    }
}

fn push_block_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }

        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();
        if name == "br" {
            out.push('\n');
        } else if !SKIPPED_TAGS.contains(&name) {
            push_block_text(child, out);
            if BLOCK_TAGS.contains(&name) {
                out.push_str("\n\n");
            }
        }
    }
}

/// Text of the first paragraph of `content`: the first non-empty block of
/// its flattened text. Headings and other block elements count as blocks,
/// so a leading `<h2>` is the first paragraph.
pub fn first_paragraph(content: &str) -> String {
    let Ok(document) = HtmlDocument::parse(content) else {
        return String::new();
    };

    BLANK_LINE
        .split(&document.block_text())
        .map(str::trim)
        .find(|block| !block.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Markup stripped down to readable text.
pub fn plain_text(content: &str) -> String {
    HtmlDocument::parse(content)
        .map(|document| document.text())
        .unwrap_or_default()
}

/// Count words in already flattened text. A word is a run of letters that
/// may contain, but not start with, apostrophes and hyphens.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_is_usage_error() {
        assert!(matches!(HtmlDocument::parse(""), Err(HtmlError::NoContent)));
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let document = HtmlDocument::parse("<p>Unclosed <b>bold <img src=x.png <h2>Sub").unwrap();
        assert_eq!(document.count("a").unwrap(), 0);
        assert!(document.text().contains("Unclosed"));
    }

    #[test]
    fn test_plain_text_without_markup_parses() {
        let document = HtmlDocument::parse("just words").unwrap();
        assert_eq!(document.count("img").unwrap(), 0);
        assert_eq!(document.text(), "just words");
    }

    #[test]
    fn test_count_elements() {
        let document = HtmlDocument::parse(
            r#"<p><img src="a.png"/> text <a href="/x">x</a></p><h2>Sub</h2><img src="b.png">"#,
        )
        .unwrap();
        assert_eq!(document.count("img").unwrap(), 2);
        assert_eq!(document.count("a").unwrap(), 1);
        assert_eq!(document.count("h2").unwrap(), 1);
    }

    #[test]
    fn test_first_text_reads_title() {
        let source = "<html><head><title>Page &amp; more</title></head><body></body></html>";
        let document = HtmlDocument::parse(source).unwrap();
        assert_eq!(document.first_text("title").unwrap(), Some("Page & more".to_string()));
        assert_eq!(document.first_text("h1").unwrap(), None);
    }

    #[test]
    fn test_count_with_attribute_skips_empty_values() {
        let document = HtmlDocument::parse(
            r#"<img src="a.png" alt="cat"><img src="b.png" alt=""><img src="c.png">"#,
        )
        .unwrap();
        assert_eq!(document.count_with_attribute("img", "alt", |_| true).unwrap(), 1);
        assert_eq!(
            document
                .count_with_attribute("img", "alt", |alt| alt.contains("dog"))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let document = HtmlDocument::parse("<p>x</p>").unwrap();
        assert!(matches!(document.elements("[[["), Err(HtmlError::Selector { .. })));
    }

    #[test]
    fn test_first_paragraph() {
        assert_eq!(
            first_paragraph(
                "<p>This is content to be checked.</p><p>Test is in the second paragraph.</p>"
            ),
            "This is content to be checked."
        );
        assert_eq!(first_paragraph(""), "");
        assert_eq!(first_paragraph("<p>  </p><p>Second</p>"), "Second");
    }

    #[test]
    fn test_first_paragraph_is_first_block() {
        assert_eq!(first_paragraph("<h2>Heading</h2><p>Body text</p>"), "Heading");
        assert_eq!(first_paragraph("<div>Intro <b>bold</b></div><p>Body</p>"), "Intro bold");
        assert_eq!(first_paragraph("<p>One<br>line two</p><p>Next</p>"), "One\nline two");
    }

    #[test]
    fn test_block_text_separates_blocks() {
        let document = HtmlDocument::parse("<h2>Sub</h2><p>A &amp; B</p>").unwrap();
        assert_eq!(document.block_text(), "Sub\n\nA & B\n\n");
    }

    #[test]
    fn test_first_paragraph_without_p_uses_first_block() {
        assert_eq!(first_paragraph("First block\n\nSecond block"), "First block");
    }

    #[test]
    fn test_plain_text_decodes_entities() {
        assert_eq!(plain_text("<p>Fish &amp; chips</p>"), "Fish & chips");
        assert_eq!(plain_text(""), "");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("This is content to be checked."), 6);
        assert_eq!(count_words("don't stop well-known 42 -dash"), 4);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_count_words_ignores_markup_tokens() {
        let text = plain_text(
            r#"<p class="intro" data-x="a b c">One two</p><img src="x.png" alt="three">"#,
        );
        assert_eq!(count_words(&text), 2);
    }
}
