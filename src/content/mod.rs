use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The inputs a page is scored on.
///
/// Every field is optional; getters return an empty string when a field was
/// never set. Checks treat empty fields as failures rather than errors.
///
/// Example YAML:
/// ```yaml
/// title: "Baking sourdough at home"
/// url: "https://example.com/recipes/sourdough"
/// meta_description: "A step by step sourdough guide"
/// subject: "sourdough"
/// content: |
///   <p>Sourdough needs time.</p>
///   <h2>Starter</h2>
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ContentBundle {
    title: Option<String>,
    content: Option<String>,
    url: Option<String>,
    meta_description: Option<String>,
    subject: Option<String>,
    rendered_content: Option<String>,
}

impl ContentBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a bundle from a YAML or JSON file (JSON is valid YAML).
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content bundle at {}", path.display()))?;

        serde_saphyr::from_str(&raw)
            .with_context(|| format!("Failed to parse content bundle in {}", path.display()))
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn meta_description(&self) -> &str {
        self.meta_description.as_deref().unwrap_or_default()
    }

    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }

    /// Rendered full-page HTML, if a renderer has supplied one.
    pub fn rendered_content(&self) -> Option<&str> {
        self.rendered_content.as_deref()
    }

    /// HTML used by the checks that need the whole page: the rendered page
    /// when it is non-empty, the body content otherwise.
    pub fn page_html(&self) -> &str {
        match self.rendered_content() {
            Some(html) if !html.is_empty() => html,
            _ => self.content(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn set_meta_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.meta_description = Some(description.into());
        self
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn set_rendered_content(&mut self, html: impl Into<String>) -> &mut Self {
        self.rendered_content = Some(html.into());
        self
    }

    pub fn clear_subject(&mut self) -> &mut Self {
        self.subject = None;
        self
    }

    pub fn clear_rendered_content(&mut self) -> &mut Self {
        self.rendered_content = None;
        self
    }
}
