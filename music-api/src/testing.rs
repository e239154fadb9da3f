//! Recording transport used by the endpoint tests.

use crate::client::MusicClient;
use crate::request::ApiRequest;
use crate::transport::{Pending, Transport};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Answers every request with the same canned body and remembers the request.
pub(crate) struct FakeTransport {
    requests: Mutex<Vec<ApiRequest>>,
    response: Value,
}

impl FakeTransport {
    pub(crate) fn last(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub(crate) fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: ApiRequest) -> Pending<Value> {
        self.requests.lock().unwrap().push(request);
        let response = self.response.clone();
        Box::pin(async move { Ok(response) })
    }
}

/// A client whose transport replies with `response`.
pub(crate) fn client_replying(response: Value) -> (MusicClient, Arc<FakeTransport>) {
    let fake = Arc::new(FakeTransport {
        requests: Mutex::new(Vec::new()),
        response,
    });
    (MusicClient::with_transport(fake.clone()), fake)
}

/// The request's URL against a fixed test base.
pub(crate) fn url_of(request: &ApiRequest) -> String {
    request.url("http://api.test")
}
