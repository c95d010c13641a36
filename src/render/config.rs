use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: &str = "10s";
pub const DEFAULT_CACHE_TTL: &str = "5m";
pub const DEFAULT_USER_AGENT: &str = "seo-score";

/// How rendered pages are produced and cached.
///
/// Example YAML:
/// ```yaml
/// render:
///   site_title: "Example Site"
///   timeout: "10s"
///   cache_ttl: "5m"
///   user_agent: "seo-score"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Site name appended to page titles, and used alone for untitled pages
    #[serde(default)]
    pub site_title: Option<String>,

    /// HTTP timeout as a duration string (default: "10s")
    #[serde(default)]
    pub timeout: Option<String>,

    /// How long fetched pages stay cached (default: "5m"; "0s" disables)
    #[serde(default)]
    pub cache_ttl: Option<String>,

    /// User-Agent header sent when fetching pages
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl RenderConfig {
    pub fn site_title(&self) -> &str {
        self.site_title.as_deref().unwrap_or_default()
    }

    pub fn timeout(&self) -> Result<Duration> {
        let raw = self.timeout.as_deref().unwrap_or(DEFAULT_TIMEOUT);
        humantime::parse_duration(raw).with_context(|| format!("invalid duration '{}'", raw))
    }

    pub fn cache_ttl(&self) -> Result<Duration> {
        let raw = self.cache_ttl.as_deref().unwrap_or(DEFAULT_CACHE_TTL);
        humantime::parse_duration(raw).with_context(|| format!("invalid duration '{}'", raw))
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
