//! Client configuration stored at `~/.config/cloud-music/config.json`.
//!
//! ```json
//! {
//!   "base_url": "http://localhost:3000",
//!   "timeout_secs": 30,
//!   "user_agent": "Mozilla/5.0 ..."
//! }
//! ```
//!
//! Every field is optional; missing fields take their defaults. The
//! `CLOUD_MUSIC_BASE_URL` environment variable overrides `base_url`.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "CLOUD_MUSIC_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Where and how to reach the music API server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL of the API server, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load from the default location, then apply environment overrides.
    ///
    /// Returns the defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::path()?)?;
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            tracing::debug!(%url, "base URL overridden from environment");
            config.base_url = url;
        }
        Ok(config)
    }

    /// Load from an explicit file; missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save to the default location, creating parent directories if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn path() -> Result<PathBuf> {
        Ok(app_dir()?.join("config.json"))
    }
}

/// `~/.config/cloud-music` (platform equivalent), shared with the session file.
pub(crate) fn app_dir() -> Result<PathBuf> {
    let config = dirs::config_dir()
        .ok_or_else(|| ApiError::Other("cannot determine config directory".into()))?;
    Ok(config.join("cloud-music"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "base_url": "https://music.example.com" }"#).unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://music.example.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ClientConfig {
            base_url: "http://10.0.0.2:4000".into(),
            timeout_secs: 5,
            ..ClientConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(ClientConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ClientConfig::load_from(&path), Err(ApiError::Json(_))));
    }
}
