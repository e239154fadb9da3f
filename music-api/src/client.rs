//! Client handle for the music API.
//!
//! [`MusicClient`] owns a [`Transport`] and exposes one method per remote
//! endpoint. The endpoint methods live in separate modules (`discover`,
//! `track`, `artist`, `mv`, `search`, `user`, `login`, `playlist`, `comment`)
//! as `impl MusicClient` blocks.
//!
//! Every endpoint method builds its request synchronously and returns a
//! [`Pending`] that owns everything it needs, so it can be awaited directly
//! or passed to [`make_cancelable`](crate::cancel::make_cancelable).

use crate::auth::Session;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::request::ApiRequest;
use crate::transport::{HttpTransport, Pending, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Cheaply cloneable handle to the music API.
#[derive(Clone)]
pub struct MusicClient {
    transport: Arc<dyn Transport>,
}

impl MusicClient {
    /// Create a client from `~/.config/cloud-music/config.json` and the saved
    /// session.
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::load()?, Session::load()?)
    }

    /// Create a client with explicit configuration and session.
    pub fn with_config(config: &ClientConfig, session: Session) -> Result<Self> {
        let transport = HttpTransport::new(config, session)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over any [`Transport`] (a proxy, a recording fake, ...).
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a request and return the raw response envelope.
    pub fn get(&self, request: ApiRequest) -> Pending<Value> {
        self.transport.send(request)
    }

    /// Send a request and decode the response with `decode`.
    pub(crate) fn get_with<T, F>(&self, request: ApiRequest, decode: F) -> Pending<T>
    where
        T: 'static,
        F: FnOnce(Value) -> Result<T> + Send + 'static,
    {
        let pending = self.transport.send(request);
        Box::pin(async move { decode(pending.await?) })
    }

    /// Send a request and deserialize the response field `key` into `T`.
    pub(crate) fn get_field<T>(&self, request: ApiRequest, key: &'static str) -> Pending<T>
    where
        T: DeserializeOwned + 'static,
    {
        self.get_with(request, move |resp| take_field(resp, key))
    }
}

impl std::fmt::Debug for MusicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicClient").finish_non_exhaustive()
    }
}

/// Move the field `key` out of a response and deserialize it.
pub(crate) fn take_field<T: DeserializeOwned>(mut resp: Value, key: &str) -> Result<T> {
    let value = resp
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ApiError::Other(format!("missing `{key}` in response")))?;
    Ok(serde_json::from_value(value)?)
}

/// Fail with [`ApiError::MissingParam`] when a string argument is blank.
pub(crate) fn require(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingParam(name));
    }
    Ok(())
}

/// Fail with [`ApiError::MissingParam`] when an ID is zero (never a valid ID).
pub(crate) fn require_id(name: &'static str, id: u64) -> Result<()> {
    if id == 0 {
        return Err(ApiError::MissingParam(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn take_field_decodes_and_reports_missing() {
        let ids: Vec<u64> = take_field(json!({ "code": 200, "ids": [1, 2] }), "ids").unwrap();
        assert_eq!(ids, vec![1, 2]);

        let err = take_field::<Vec<u64>>(json!({ "code": 200 }), "ids").unwrap_err();
        assert_eq!(err.to_string(), "missing `ids` in response");

        let err = take_field::<Vec<u64>>(json!({ "ids": "oops" }), "ids").unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[test]
    fn require_rejects_blank() {
        assert!(require("keywords", "jay").is_ok());
        assert!(matches!(require("keywords", "  "), Err(ApiError::MissingParam("keywords"))));
        assert!(require_id("uid", 48_353).is_ok());
        assert!(matches!(require_id("uid", 0), Err(ApiError::MissingParam("uid"))));
    }
}
