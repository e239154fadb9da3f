//! HTTP transport for the music API server.
//!
//! The server answers every `GET` with a JSON envelope:
//!
//! ```json
//! {
//!   "code": 200,
//!   ...endpoint-specific fields...
//! }
//! ```
//!
//! Non-200 codes are mapped to [`ApiError::Api`]. The server may also send a
//! non-2xx HTTP status together with such an envelope, so the body is decoded
//! regardless of the HTTP status.

use crate::auth::Session;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::request::ApiRequest;
use reqwest::Client;
use reqwest::header::COOKIE;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A request in flight: settles exactly once with the decoded body or an error.
///
/// `'static` and `Send`, so it can be handed to
/// [`make_cancelable`](crate::cancel::make_cancelable) directly.
pub type Pending<T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'static>>;

/// Something that turns an [`ApiRequest`] into a pending JSON response.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> Pending<Value>;
}

/// A [`Pending`] that has already failed.
pub(crate) fn rejected<T: Send + 'static>(err: ApiError) -> Pending<T> {
    Box::pin(std::future::ready(Err(err)))
}

/// [`Transport`] over `reqwest`.
///
/// Holds the HTTP client, the server base URL and the login [`Session`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Arc<str>,
    session: Arc<Session>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: Arc::from(config.base_url.as_str()),
            session: Arc::new(session),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> Pending<Value> {
        let mut req = self.http.get(request.url(&self.base_url));
        if request.with_credentials() {
            if let Some(cookie) = self.session.cookie_header() {
                req = req.header(COOKIE, cookie);
            }
        }

        Box::pin(async move {
            tracing::debug!(path = request.path(), "sending request");
            let resp = req.send().await?;
            let json: Value = resp.json().await?;
            check_envelope(request.path(), json)
        })
    }
}

/// Map a response envelope with a non-200 `code` to [`ApiError::Api`].
fn check_envelope(path: &str, json: Value) -> Result<Value> {
    if let Some(code) = json.get("code").and_then(Value::as_i64) {
        if code != 200 {
            let message = json
                .get("message")
                .or_else(|| json.get("msg"))
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_owned();
            tracing::warn!(path, code, %message, "API returned an error code");
            return Err(ApiError::Api { code, message });
        }
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_passes_through() {
        let body = json!({ "code": 200, "banners": [] });
        assert_eq!(check_envelope("/banner", body.clone()).unwrap(), body);
    }

    #[test]
    fn envelope_without_code_passes_through() {
        let body = json!({ "data": [1, 2, 3] });
        assert!(check_envelope("/x", body).is_ok());
    }

    #[test]
    fn error_code_uses_message_or_msg() {
        let err = check_envelope("/user/record", json!({ "code": 301, "msg": "需要登录" }))
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "API error (code 301): 需要登录");

        let err = check_envelope("/login", json!({ "code": 502, "message": "密码错误" })).unwrap_err();
        assert!(matches!(err, ApiError::Api { code: 502, ref message } if message == "密码错误"));

        let err = check_envelope("/x", json!({ "code": -460 })).unwrap_err();
        assert_eq!(err.to_string(), "API error (code -460): unknown error");
    }

    #[tokio::test]
    async fn rejected_settles_immediately() {
        let err = rejected::<Value>(ApiError::MissingParam("uid")).await.unwrap_err();
        assert_eq!(err.to_string(), "missing required parameter `uid`");
    }

    fn rejected_any<T: Send + 'static>(name: &'static str) -> Pending<T> {
        rejected(ApiError::MissingParam(name))
    }

    #[tokio::test]
    async fn rejected_is_spawnable_for_any_send_type() {
        let task = tokio::spawn(rejected_any::<Vec<String>>("keywords"));
        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, ApiError::MissingParam("keywords")));
    }

    #[test]
    fn http_transport_keeps_session_and_base_url() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..ClientConfig::default()
        };
        let session = Session {
            cookie: Some("MUSIC_U=abc".into()),
        };
        let transport = HttpTransport::new(&config, session).unwrap();
        assert_eq!(transport.base_url(), "http://127.0.0.1:9");
        assert!(transport.session().is_logged_in());
    }
}
