//! Session persistence — keeps the login cookie on disk.
//!
//! The session file is stored at `~/.config/cloud-music/session.json`:
//!
//! ```json
//! { "cookie": "MUSIC_U=00AABBCC...; __csrf=..." }
//! ```
//!
//! The cookie string is returned in the body of the `/login` and
//! `/login/cellphone` responses and replayed verbatim on requests that carry
//! credentials.

use crate::config::app_dir;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Login session backed by a JSON file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    /// Raw `Cookie` header value issued at login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
}

impl Session {
    /// Load session from `~/.config/cloud-music/session.json`.
    ///
    /// Returns a default (empty) session if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save session to disk, creating parent directories if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Delete the session file from disk.
    pub fn clear() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Extract the session from a login response body (`{ "cookie": "..." }`).
    pub fn from_login_response(resp: &Value) -> Option<Self> {
        let cookie = resp.get("cookie").and_then(Value::as_str)?;
        if cookie.is_empty() {
            return None;
        }
        Some(Self {
            cookie: Some(cookie.to_owned()),
        })
    }

    /// Value for the `Cookie` header, if logged in.
    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie.as_deref().filter(|c| !c.is_empty())
    }

    /// Check whether a cookie is present (does not validate it).
    pub fn is_logged_in(&self) -> bool {
        self.cookie_header().is_some()
    }

    fn path() -> Result<PathBuf> {
        Ok(app_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_cookie() {
        let resp = json!({ "code": 200, "cookie": "MUSIC_U=abc; __csrf=def" });
        let session = Session::from_login_response(&resp).unwrap();
        assert_eq!(session.cookie_header(), Some("MUSIC_U=abc; __csrf=def"));
        assert!(session.is_logged_in());

        assert_eq!(Session::from_login_response(&json!({ "code": 200 })), None);
        assert_eq!(Session::from_login_response(&json!({ "cookie": "" })), None);
    }

    #[test]
    fn empty_cookie_is_logged_out() {
        let session = Session {
            cookie: Some(String::new()),
        };
        assert!(!session.is_logged_in());
        assert_eq!(session.cookie_header(), None);
    }

    #[test]
    fn persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        assert_eq!(Session::load_from(&path).unwrap(), Session::default());

        let session = Session {
            cookie: Some("MUSIC_U=xyz".into()),
        };
        session.save_to(&path).unwrap();
        assert_eq!(Session::load_from(&path).unwrap(), session);
    }
}
