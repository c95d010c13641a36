use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::{PageRenderer, PageRequest};

/// Get the platform-appropriate cache directory for rendered pages
pub fn get_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|p| p.join("seo-score/render-cache"))
        .unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}/.cache/seo-score/render-cache",
                std::env::var("HOME").unwrap_or_default()
            ))
        })
}

/// Clear the rendered page cache directory
pub fn clear_cache(cache_path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(cache_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("Failed to remove cache directory"),
    }
}

/// Cached rendered page with timestamp
#[derive(Debug, Serialize, Deserialize)]
struct CachedPage {
    html: String,
    fetched_at: u64, // Unix timestamp
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn cache_key(url: &str) -> String {
    format!("render:{}", url)
}

/// Renderer decorator persisting results on disk with cacache, keyed by URL.
///
/// Pages without a URL are never cached. Cache read and write problems are
/// ignored; the wrapped renderer is simply called.
pub struct CachedRenderer<R> {
    inner: R,
    cache_path: PathBuf,
    ttl: Duration,
}

impl<R: PageRenderer> CachedRenderer<R> {
    pub fn new(inner: R, cache_path: PathBuf, ttl: Duration) -> Self {
        Self {
            inner,
            cache_path,
            ttl,
        }
    }

    fn read(&self, url: &str) -> Option<String> {
        let bytes = cacache::read_sync(&self.cache_path, cache_key(url)).ok()?;
        let cached: CachedPage = serde_json::from_slice(&bytes).ok()?;

        if now_secs().saturating_sub(cached.fetched_at) < self.ttl.as_secs() {
            Some(cached.html)
        } else {
            None
        }
    }

    fn write(&self, url: &str, html: &str) -> Result<()> {
        let entry = CachedPage {
            html: html.to_string(),
            fetched_at: now_secs(),
        };
        let json = serde_json::to_vec(&entry)?;
        cacache::write_sync(&self.cache_path, cache_key(url), json)?;
        Ok(())
    }
}

impl<R: PageRenderer> PageRenderer for CachedRenderer<R> {
    async fn render(&self, page: &PageRequest<'_>) -> Result<String> {
        if page.url.is_empty() || self.ttl.is_zero() {
            return self.inner.render(page).await;
        }

        if let Some(html) = self.read(page.url) {
            tracing::debug!(url = page.url, "rendered page served from cache");
            return Ok(html);
        }

        let html = self.inner.render(page).await?;
        if let Err(e) = self.write(page.url, &html) {
            tracing::debug!(url = page.url, error = %e, "failed to cache rendered page");
        }
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::Cell;
    use std::env;

    struct CountingRenderer {
        calls: Cell<usize>,
        fail: bool,
    }

    impl PageRenderer for CountingRenderer {
        async fn render(&self, page: &PageRequest<'_>) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                bail!("renderer offline");
            }
            Ok(format!("<title>{}</title>", page.url))
        }
    }

    fn request(url: &str) -> PageRequest<'_> {
        PageRequest {
            url,
            title: "",
            meta_description: "",
            content: "",
        }
    }

    fn temp_cache(name: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        let _ = clear_cache(&path);
        path
    }

    #[tokio::test]
    async fn test_second_render_hits_cache() {
        let path = temp_cache("seo_score_test_render_cache_hit");
        let renderer = CachedRenderer::new(
            CountingRenderer { calls: Cell::new(0), fail: false },
            path.clone(),
            Duration::from_secs(60),
        );

        let first = renderer.render(&request("https://example.com/a")).await.unwrap();
        let second = renderer.render(&request("https://example.com/a")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(renderer.inner.calls.get(), 1);

        renderer.render(&request("https://example.com/b")).await.unwrap();
        assert_eq!(renderer.inner.calls.get(), 2);

        let _ = clear_cache(&path);
    }

    #[tokio::test]
    async fn test_zero_ttl_bypasses_cache() {
        let path = temp_cache("seo_score_test_render_cache_zero_ttl");
        let renderer = CachedRenderer::new(
            CountingRenderer { calls: Cell::new(0), fail: false },
            path.clone(),
            Duration::ZERO,
        );

        renderer.render(&request("https://example.com/a")).await.unwrap();
        renderer.render(&request("https://example.com/a")).await.unwrap();
        assert_eq!(renderer.inner.calls.get(), 2);

        let _ = clear_cache(&path);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let path = temp_cache("seo_score_test_render_cache_failure");
        let renderer = CachedRenderer::new(
            CountingRenderer { calls: Cell::new(0), fail: true },
            path.clone(),
            Duration::from_secs(60),
        );

        assert!(renderer.render(&request("https://example.com/a")).await.is_err());
        assert!(renderer.render(&request("https://example.com/a")).await.is_err());
        assert_eq!(renderer.inner.calls.get(), 2);

        let _ = clear_cache(&path);
    }

    #[test]
    fn test_clear_missing_cache_is_ok() {
        let path = env::temp_dir().join("seo_score_test_render_cache_missing");
        let _ = std::fs::remove_dir_all(&path);
        assert!(clear_cache(&path).is_ok());
    }
}
