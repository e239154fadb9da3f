//! Login endpoints.
//!
//! A successful login answers with the account profile and a `cookie` string;
//! use [`Session::from_login_response`](crate::auth::Session::from_login_response)
//! to keep it for later requests.

use crate::client::{MusicClient, require};
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::{Pending, rejected};
use serde_json::Value;

/// Country calling code used when none is given (mainland China).
pub const DEFAULT_COUNTRY_CODE: u16 = 86;

impl MusicClient {
    /// Log in with an email address and password.
    pub fn login_email(&self, email: &str, password: &str) -> Pending<Value> {
        if let Err(err) = require("email", email).and_then(|()| require("password", password)) {
            return rejected(err);
        }
        let request = ApiRequest::get("/login")
            .param("email", email)
            .param("password", password)
            .credentials();
        self.get(request)
    }

    /// Log in with a phone number, password and country calling code.
    pub fn login_phone(&self, phone: &str, password: &str, countrycode: u16) -> Pending<Value> {
        let checked = require("phone", phone)
            .and_then(|()| require("password", password))
            .and_then(|()| {
                if countrycode == 0 {
                    Err(ApiError::MissingParam("countrycode"))
                } else {
                    Ok(())
                }
            });
        if let Err(err) = checked {
            return rejected(err);
        }
        let request = ApiRequest::get("/login/cellphone")
            .param("phone", phone)
            .param("password", password)
            .param("countrycode", countrycode)
            .credentials();
        self.get(request)
    }

    /// End the server-side session of the stored cookie.
    pub fn logout(&self) -> Pending<Value> {
        self.get(ApiRequest::get("/logout").credentials())
    }

    /// Current login state (`data.account`, `data.profile`; null when logged out).
    pub fn login_status(&self) -> Pending<Value> {
        self.get(ApiRequest::get("/login/status").credentials())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::testing::{client_replying, url_of};
    use serde_json::json;

    #[tokio::test]
    async fn login_email_sends_credentials() {
        let (client, fake) = client_replying(json!({ "code": 200, "cookie": "MUSIC_U=1" }));
        let resp = client.login_email("me@example.com", "p@ss").await.unwrap();
        assert_eq!(resp["cookie"], "MUSIC_U=1");
        let req = fake.last();
        assert!(req.with_credentials());
        assert_eq!(
            url_of(&req),
            "http://api.test/login?email=me%40example.com&password=p%40ss"
        );
    }

    #[tokio::test]
    async fn login_phone_validates_every_field() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        let cases = [
            ("", "pw", 86, "phone"),
            ("13800000000", "", 86, "password"),
            ("13800000000", "pw", 0, "countrycode"),
        ];
        for (phone, password, code, missing) in cases {
            let err = client.login_phone(phone, password, code).await.unwrap_err();
            assert!(matches!(err, ApiError::MissingParam(name) if name == missing));
        }
        assert_eq!(fake.count(), 0);

        client.login_phone("13800000000", "pw", 86).await.unwrap();
        assert_eq!(
            url_of(&fake.last()),
            "http://api.test/login/cellphone?phone=13800000000&password=pw&countrycode=86"
        );
    }

    #[tokio::test]
    async fn login_email_requires_both_fields() {
        let (client, _fake) = client_replying(json!({ "code": 200 }));
        let err = client.login_email("me@example.com", "").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParam("password")));
    }

    #[tokio::test]
    async fn status_and_logout() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        client.login_status().await.unwrap();
        assert!(fake.last().with_credentials());
        assert_eq!(fake.last().path(), "/login/status");
        client.logout().await.unwrap();
        assert_eq!(fake.last().path(), "/logout");
        assert!(fake.last().with_credentials());
    }
}
