//! Request descriptors handed to a [`Transport`](crate::transport::Transport).
//!
//! Every endpoint call produces exactly one [`ApiRequest`]: a path, an ordered
//! list of query parameters and a credentials flag. Building the URL is a pure
//! function so endpoint marshaling can be checked without a server.

use std::fmt::Display;

/// A single `GET` request against the music API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    query: Vec<(&'static str, String)>,
    with_credentials: bool,
}

impl ApiRequest {
    /// Start a request for `path` (leading slash optional).
    pub fn get(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self {
            path,
            query: Vec::new(),
            with_credentials: false,
        }
    }

    /// Append a query parameter. Parameters keep insertion order.
    #[must_use]
    pub fn param(mut self, key: &'static str, value: impl Display) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Send the session cookie along with this request.
    #[must_use]
    pub fn credentials(mut self) -> Self {
        self.with_credentials = true;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Look up the first value of a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    /// Full URL of this request relative to `base_url`.
    ///
    /// Query values are percent-encoded; keys are static ASCII identifiers.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}
