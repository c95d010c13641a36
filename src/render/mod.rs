pub mod cache;
pub mod config;

pub use cache::{clear_cache, get_cache_path, CachedRenderer};
pub use config::RenderConfig;

use anyhow::{bail, Context, Result};
use std::time::Duration;

use crate::content::ContentBundle;

/// What a renderer gets to work with for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub meta_description: &'a str,
    pub content: &'a str,
}

impl<'a> PageRequest<'a> {
    pub fn from_bundle(bundle: &'a ContentBundle) -> Self {
        Self {
            url: bundle.url(),
            title: bundle.title(),
            meta_description: bundle.meta_description(),
            content: bundle.content(),
        }
    }
}

/// Produces the full HTML of a page, including its `<title>`.
///
/// Failures are reported, never panicked on; callers fall back to the body
/// content they already have.
#[allow(async_fn_in_trait)]
pub trait PageRenderer {
    async fn render(&self, page: &PageRequest<'_>) -> Result<String>;
}

/// Offline renderer that wraps the body content in a minimal document.
///
/// The document title is `"{page title} » {site title}"`. Either half may be
/// missing; the site title is the fallback when the page has no title.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    site_title: String,
}

impl DocumentRenderer {
    pub fn new(site_title: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
        }
    }

    pub fn document_title(&self, page_title: &str) -> String {
        let page_title = page_title.trim();
        let site_title = self.site_title.trim();

        match (page_title.is_empty(), site_title.is_empty()) {
            (false, false) => format!("{} » {}", page_title, site_title),
            (false, true) => page_title.to_string(),
            (true, false) => site_title.to_string(),
            (true, true) => String::new(),
        }
    }
}

impl PageRenderer for DocumentRenderer {
    async fn render(&self, page: &PageRequest<'_>) -> Result<String> {
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
             <meta name=\"description\" content=\"{}\">\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape_text(&self.document_title(page.title)),
            escape_text(page.meta_description),
            page.content
        ))
    }
}

pub(crate) fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Fetches the live page over HTTP. Non-success statuses are errors.
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    client: reqwest::Client,
}

impl HttpRenderer {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl PageRenderer for HttpRenderer {
    async fn render(&self, page: &PageRequest<'_>) -> Result<String> {
        if page.url.is_empty() {
            bail!("No URL to fetch");
        }

        let response = self
            .client
            .get(page.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", page.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Fetching {} returned {}", page.url, status);
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", page.url))
    }
}
