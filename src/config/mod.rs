mod init;
mod schema;

pub use init::write_default_config;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::{validate_scoring, Criterion, ScoringConfig};
use crate::render::RenderConfig;
use crate::tips::TipCatalog;

/// Get the config directory path (~/.config/seo-score/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("seo-score")
}

/// Get the default config file path (~/.config/seo-score/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/seo-score/config.yaml), and a missing default file means
///   built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

impl Config {
    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn render(&self) -> RenderConfig {
        self.render.clone().unwrap_or_default()
    }

    /// Default tip catalog with the configured overrides applied.
    pub fn tip_catalog(&self) -> Result<TipCatalog> {
        match &self.tips {
            Some(overrides) => TipCatalog::default().with_overrides(overrides),
            None => Ok(TipCatalog::default()),
        }
    }
}

/// Validate the whole config at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(scoring_errors) = validate_scoring(&config.scoring()) {
        errors.extend(scoring_errors);
    }

    let render = config.render();
    match render.timeout() {
        Ok(timeout) if timeout.is_zero() => {
            errors.push("render.timeout: must be greater than zero".to_string());
        }
        Ok(_) => {}
        Err(e) => errors.push(format!("render.timeout: {:#}", e)),
    }
    if let Err(e) = render.cache_ttl() {
        errors.push(format!("render.cache_ttl: {:#}", e));
    }

    if let Some(ref tips) = config.tips {
        for (key, message) in tips {
            if Criterion::from_key(key).is_err() {
                errors.push(format!("tips.{}: unknown criterion", key));
            } else if message.trim().is_empty() {
                errors.push(format!("tips.{}: message must not be empty", key));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
