use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::Config;
use crate::render::config::{DEFAULT_CACHE_TTL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::render::RenderConfig;
use crate::scoring::ScoringConfig;

const HEADER: &str = "\
# seo-score configuration
#
# scoring: thresholds for the checks that run without a subject
# render:  how full pages are produced for the <title> and image-title checks
# tips:    message overrides keyed by criterion (see `seo-score criteria`)
";

/// The config `init` writes: every default spelled out.
pub fn default_config() -> Config {
    Config {
        scoring: Some(ScoringConfig::default()),
        render: Some(RenderConfig {
            site_title: Some(String::new()),
            timeout: Some(DEFAULT_TIMEOUT.to_string()),
            cache_ttl: Some(DEFAULT_CACHE_TTL.to_string()),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }),
        tips: None,
    }
}

/// Write the default config to `path` atomically.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let yaml = serde_saphyr::to_string(&default_config())
        .context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .and_then(|_| file.write_all(yaml.as_bytes()))
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, validate_config};
    use std::env;

    #[test]
    fn test_written_config_loads_and_validates() {
        let path = env::temp_dir().join("seo_score_test_init").join("config.yaml");
        let _ = std::fs::remove_file(&path);

        write_default_config(&path, false).unwrap();
        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config, default_config());
        assert!(validate_config(&config).is_ok());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let path = env::temp_dir().join("seo_score_test_init_existing.yaml");
        std::fs::write(&path, "scoring:\n  content_min_words: 10\n").unwrap();

        assert!(write_default_config(&path, false).is_err());
        let untouched = std::fs::read_to_string(&path).unwrap();
        assert!(untouched.contains("content_min_words: 10"));

        write_default_config(&path, true).unwrap();
        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.scoring().min_words(), 250);

        let _ = std::fs::remove_file(&path);
    }
}
