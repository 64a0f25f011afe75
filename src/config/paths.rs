//! Redirect document loading.
//!
//! A redirect document is a YAML sequence of records, each with exactly a
//! `path` and a `url`:
//!
//! ```yaml
//! - path: /golang
//!   url: https://golang.org
//! - path: /yaml-godoc
//!   url: https://godoc.org/gopkg.in/yaml.v2
//! ```
//!
//! Parsing is strict. An unknown field, a missing field, a wrong type or a
//! top level that is not a sequence fails the whole load; there are no
//! partial results.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::PathMapping;

/// A single `path` → `url` record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathEntry {
    pub path: String,
    pub url: String,
}

/// The redirect document does not match the record schema.
#[derive(Debug, Error)]
#[error("invalid redirect document: {0}")]
pub struct ParseError(#[from] serde_yaml::Error);

/// Errors reading a redirect document from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Strictly parse a document into its records, in document order.
pub fn parse_entries(raw: &[u8]) -> Result<Vec<PathEntry>, ParseError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    // A bare `null`/`~` document means "no records".
    let entries: Option<Vec<PathEntry>> = serde_yaml::from_slice(raw)?;
    Ok(entries.unwrap_or_default())
}

/// Fold records into a mapping; later duplicates overwrite earlier ones.
pub fn build_mapping(entries: impl IntoIterator<Item = PathEntry>) -> PathMapping {
    let mut mapping = PathMapping::new();
    for entry in entries {
        if let Some(previous) = mapping.insert(entry.path.clone(), entry.url) {
            tracing::warn!(
                path = %entry.path,
                replaced = %previous,
                "Duplicate redirect path, keeping the later entry"
            );
        }
    }
    mapping
}

/// Parse a redirect document into a mapping.
pub fn load(raw: &[u8]) -> Result<PathMapping, ParseError> {
    let entries = parse_entries(raw)?;
    let count = entries.len();
    let mapping = build_mapping(entries);

    tracing::debug!(records = count, paths = mapping.len(), "Redirect document parsed");
    Ok(mapping)
}

/// Read and parse a redirect document from disk.
pub fn load_file(path: &Path) -> Result<PathMapping, LoadError> {
    let raw = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mapping = load(&raw)?;

    tracing::info!(file = %path.display(), paths = mapping.len(), "Redirect document loaded");
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
- path: /golang
  url: https://golang.org
- path: /yaml-godoc
  url: https://godoc.org/gopkg.in/yaml.v2
";

    #[test]
    fn test_load_sample_document() {
        let mapping = load(SAMPLE.as_bytes()).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("/golang"), Some("https://golang.org"));
        assert_eq!(
            mapping.get("/yaml-godoc"),
            Some("https://godoc.org/gopkg.in/yaml.v2")
        );
        assert_eq!(mapping.get("/missing"), None);
    }

    #[test]
    fn test_parse_entries_keeps_document_order() {
        let entries = parse_entries(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                PathEntry {
                    path: "/golang".into(),
                    url: "https://golang.org".into(),
                },
                PathEntry {
                    path: "/yaml-godoc".into(),
                    url: "https://godoc.org/gopkg.in/yaml.v2".into(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_paths_last_write_wins() {
        let yaml = "\
- path: /dup
  url: https://a.example
- path: /other
  url: https://other.example
- path: /dup
  url: https://b.example
";
        let mapping = load(yaml.as_bytes()).unwrap();

        assert_eq!(mapping.len(), 2); // Distinct paths only
        assert_eq!(mapping.get("/dup"), Some("https://b.example"));
    }

    #[test]
    fn test_unknown_field_fails_whole_load() {
        let yaml = "\
- path: /ok
  url: https://ok.example
- path: /bad
  url: https://bad.example
  title: extra
";
        let err = load(yaml.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("unknown field"), "{err}");
    }

    #[test]
    fn test_missing_field_fails() {
        let yaml = "- path: /only-path\n";
        let err = load(yaml.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing field"), "{err}");
    }

    #[test]
    fn test_wrong_type_fails() {
        let yaml = "- path: [/a, /b]\n  url: https://a.example\n";
        assert!(load(yaml.as_bytes()).is_err());
    }

    #[test]
    fn test_top_level_mapping_fails() {
        let yaml = "path: /golang\nurl: https://golang.org\n";
        assert!(load(yaml.as_bytes()).is_err());
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let yaml = "- path: /a\n  url: [unterminated\n";
        assert!(load(yaml.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_document_is_empty_mapping() {
        assert!(load(b"").unwrap().is_empty());
        assert!(load(b"  \n\t\n").unwrap().is_empty());
        assert!(load(b"~\n").unwrap().is_empty());
        assert!(load(b"[]\n").unwrap().is_empty());
    }

    #[test]
    fn test_paths_are_not_validated() {
        let yaml = "- path: no-leading-slash\n  url: relative/target\n";
        let mapping = load(yaml.as_bytes()).unwrap();
        assert_eq!(mapping.get("no-leading-slash"), Some("relative/target"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let mapping = load_file(file.path()).unwrap();
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_load_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_file(&dir.path().join("absent.yaml")).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_load_file_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"- path: /a\n  link: https://a.example\n").unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
