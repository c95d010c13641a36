use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered rewrite rules turning free text into a URL segment.
static REPLACEMENTS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"&amp;", "-and-"),
        (r"&", "-and-"),
        (r"\s|\+", "-"),
        (r"[_.]+", "-"),
        (r"[^a-z0-9\-]+", ""),
        (r"-{2,}", "-"),
        (r"^-+", ""),
        (r"-+$", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid slug regex"), replacement))
    .collect()
});

/// Turn `text` into the segment a CMS would generate for it: lowercase,
/// transliterated to ASCII, separators as single hyphens, no leading or
/// trailing hyphen.
pub fn url_segment(text: &str) -> String {
    let mut segment = deunicode::deunicode(&text.to_lowercase()).to_lowercase();
    for (pattern, replacement) in REPLACEMENTS.iter() {
        segment = pattern.replace_all(&segment, *replacement).into_owned();
    }
    segment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word() {
        assert_eq!(url_segment("Test"), "test");
    }

    #[test]
    fn test_spaces_become_hyphens() {
        assert_eq!(url_segment("Test Page  Title"), "test-page-title");
    }

    #[test]
    fn test_diacritics_stripped() {
        assert_eq!(url_segment("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn test_punctuation_and_ampersand() {
        assert_eq!(url_segment("Fish & Chips!"), "fish-and-chips");
        assert_eq!(url_segment("node.js_guide"), "node-js-guide");
        assert_eq!(url_segment("  --edge--  "), "edge");
    }

    #[test]
    fn test_symbols_only_collapse_to_empty() {
        assert_eq!(url_segment("!!!"), "");
    }
}
