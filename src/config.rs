//! Initial values snapshot: where it lives and how it is loaded.
//!
//! A snapshot is a JSON document with the form's camelCase keys. Any key
//! may be left out. Lookup order for `fill`:
//! 1. an explicit path (must exist)
//! 2. `<config_dir>/job-form/defaults.json`, if present
//! 3. an empty application

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::application::JobApplication;

const APP_DIR: &str = "job-form";
const SNAPSHOT_FILE: &str = "defaults.json";

/// Errors that can occur while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly requested file does not exist
    #[error("Snapshot not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// File exists but could not be read
    #[error("Failed to read snapshot {}: {source}", path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    /// File is not a valid snapshot
    #[error("Invalid snapshot {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Default snapshot location, if the platform has a config directory.
pub fn default_snapshot_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SNAPSHOT_FILE))
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<JobApplication, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let values = serde_json::from_str(&text).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded snapshot from {}", path.display());
    Ok(values)
}

/// Resolve the initial values for the form.
///
/// `fallback` is the default location; it is only read when it exists.
pub fn resolve_snapshot(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
) -> Result<JobApplication, ConfigError> {
    if let Some(path) = explicit {
        return load_snapshot(path);
    }

    match fallback {
        Some(path) if path.exists() => load_snapshot(path),
        _ => {
            debug!("no snapshot found, starting empty");
            Ok(JobApplication::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Position;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_partial_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "defaults.json",
            r#"{"fullName": "Ada", "position": "Designer", "additionalSkills": ["CSS"]}"#,
        );

        let values = load_snapshot(&path).unwrap();
        assert_eq!(values.full_name, "Ada");
        assert_eq!(values.position, Some(Position::Designer));
        assert_eq!(values.additional_skills, vec!["CSS"]);
        assert!(values.email.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        let result = resolve_snapshot(Some(&missing), None);
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn missing_fallback_starts_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("defaults.json");
        let values = resolve_snapshot(None, Some(&missing)).unwrap();
        assert_eq!(values, JobApplication::default());
    }

    #[test]
    fn no_paths_starts_empty() {
        assert_eq!(resolve_snapshot(None, None).unwrap(), JobApplication::default());
    }

    #[test]
    fn existing_fallback_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "defaults.json", r#"{"email": "ada@example.com"}"#);
        let values = resolve_snapshot(None, Some(&path)).unwrap();
        assert_eq!(values.email, "ada@example.com");
    }

    #[test]
    fn malformed_json_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{ not json");
        let error = load_snapshot(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { .. }));
        assert!(error.to_string().contains("broken.json"));
    }

    #[test]
    fn default_path_ends_with_app_file() {
        if let Some(path) = default_snapshot_path() {
            assert!(path.ends_with("job-form/defaults.json"));
        }
    }
}
