//! Configuration loaded from `~/.coach/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use coach_client::{DEFAULT_ANALYSIS_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Analysis service endpoint.
    pub endpoint: String,
    /// End-to-end HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ANALYSIS_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl CoachConfig {
    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable. A broken config is a warning, never a failure.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".coach").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoachConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/api/analyze/code");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CoachConfig =
            toml::from_str("endpoint = \"http://10.0.0.1:9000/analyze\"").unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.1:9000/analyze");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let config = CoachConfig::load_from(Path::new("/nonexistent/coach/config.toml"));
        assert_eq!(config.endpoint, CoachConfig::default().endpoint);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint = \"http://localhost:9999/analyze\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();
        let config = CoachConfig::load_from(&path);
        assert_eq!(config.endpoint, "http://localhost:9999/analyze");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_broken_toml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "endpoint = [broken").unwrap();
        let config = CoachConfig::load_from(&path);
        assert_eq!(config.endpoint, CoachConfig::default().endpoint);
    }
}
