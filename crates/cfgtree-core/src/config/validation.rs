//! Configuration validation.

use crate::config::types::CfgTreeConfig;
use crate::errors::ConfigError;

pub fn validate_config(config: &CfgTreeConfig) -> Result<(), ConfigError> {
    let namespace = &config.router.namespace;
    if namespace.trim().is_empty() || namespace.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("router.namespace '{}' must be a single non-empty word", namespace),
        });
    }

    if config.router.max_include_depth == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "router.max_include_depth must be at least 1".to_string(),
        });
    }

    let marker = &config.batch.comment_marker;
    if marker.trim().is_empty() || marker.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("batch.comment_marker '{}' must be non-empty without whitespace", marker),
        });
    }

    if config.status.column_width == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "status.column_width must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&CfgTreeConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_namespace() {
        let mut config = CfgTreeConfig::default();
        config.router.namespace = "  ".to_string();
        assert!(validate_config(&config).is_err());

        config.router.namespace = "two words".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_limits() {
        let mut config = CfgTreeConfig::default();
        config.router.max_include_depth = 0;
        assert!(validate_config(&config).is_err());

        let mut config = CfgTreeConfig::default();
        config.status.column_width = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_comment_marker() {
        let mut config = CfgTreeConfig::default();
        config.batch.comment_marker = String::new();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("comment_marker"));
    }
}
