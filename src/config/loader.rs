//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::paths::{self, LoadError};
use crate::config::schema::{RedirectsConfig, ServerConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::PathMapping;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Redirects: {0}")]
    Redirects(#[from] LoadError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Build the redirect table described by the configuration.
///
/// Inline paths go in first, then the YAML document (if any) overwrites
/// them path by path.
pub fn build_mapping(redirects: &RedirectsConfig) -> Result<PathMapping, LoadError> {
    let mut mapping: PathMapping = redirects
        .paths
        .iter()
        .map(|(path, url)| (path.clone(), url.clone()))
        .collect();

    if let Some(file) = &redirects.file {
        for (path, url) in paths::load_file(file)? {
            if mapping.insert(path.as_str(), url).is_some() {
                tracing::debug!(path = %path, file = %file.display(), "File entry overrides inline path");
            }
        }
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.observability.metrics_enabled);
        assert!(config.redirects.file.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [listener]
            bind_address = "127.0.0.1:3000"

            [timeouts]
            request_secs = 5

            [observability]
            log_level = "debug"
            metrics_enabled = true
            metrics_address = "127.0.0.1:9100"

            [redirects]
            file = "paths.yaml"

            [redirects.paths]
            "/urlshort" = "https://github.com/gophercises/urlshort"
        "#;
        let config = parse_config(toml).unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(config.timeouts.request_secs, 5);
        assert_eq!(config.observability.log_level, "debug");
        assert!(config.observability.metrics_enabled);
        assert_eq!(config.redirects.file.as_deref(), Some(Path::new("paths.yaml")));
        assert_eq!(
            config.redirects.paths.get("/urlshort").map(String::as_str),
            Some("https://github.com/gophercises/urlshort")
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_config("[listener]\nport = 80\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_errors_reported() {
        let err = parse_config("[timeouts]\nrequest_secs = 0\n").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[listener]\nbind_address = \"127.0.0.1:0\"\n").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:0");
    }

    #[test]
    fn test_build_mapping_file_overrides_inline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"- path: /shared\n  url: https://file.example\n- path: /file-only\n  url: https://f.example\n")
            .unwrap();

        let mut redirects = RedirectsConfig::default();
        redirects.paths.insert("/shared".into(), "https://inline.example".into());
        redirects.paths.insert("/inline-only".into(), "https://i.example".into());
        redirects.file = Some(file.path().to_path_buf());

        let mapping = build_mapping(&redirects).unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get("/shared"), Some("https://file.example"));
        assert_eq!(mapping.get("/inline-only"), Some("https://i.example"));
        assert_eq!(mapping.get("/file-only"), Some("https://f.example"));
    }

    #[test]
    fn test_build_mapping_propagates_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"- path: /a\n  url: https://a.example\n  note: x\n").unwrap();

        let redirects = RedirectsConfig {
            file: Some(file.path().to_path_buf()),
            ..RedirectsConfig::default()
        };
        assert!(matches!(build_mapping(&redirects), Err(LoadError::Parse(_))));
    }
}
