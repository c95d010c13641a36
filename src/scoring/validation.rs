use super::config::ScoringConfig;

/// Validate scoring thresholds at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.content_min_words == Some(0) {
        errors.push("scoring.content_min_words: must be at least 1".to_string());
    }

    let (min, max) = config.metatitle_range();
    if min == 0 {
        errors.push("scoring.metatitle_min_length: must be at least 1".to_string());
    }
    if min > max {
        errors.push(format!(
            "scoring.metatitle_min_length: {} is greater than metatitle_max_length {}",
            min, max
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = ScoringConfig {
            content_min_words: None,
            metatitle_min_length: None,
            metatitle_max_length: None,
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_zero_min_words() {
        let config = ScoringConfig {
            content_min_words: Some(0),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("content_min_words"));
    }

    #[test]
    fn test_inverted_title_range() {
        let config = ScoringConfig {
            content_min_words: None,
            metatitle_min_length: Some(80),
            metatitle_max_length: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("80 is greater than metatitle_max_length 70"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            content_min_words: Some(0),
            metatitle_min_length: Some(0),
            metatitle_max_length: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
