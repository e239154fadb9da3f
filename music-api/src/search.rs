//! Search API.
//!
//! Endpoint: `GET /search`
//!
//! Query parameters:
//! - `keywords` — search keyword
//! - `type` — search type (1=song, 10=album, 100=artist, 1000=playlist, ...)
//! - `limit` — page size (default 30)
//! - `offset` — pagination offset (0-based)
//!
//! Response JSON:
//! ```json
//! {
//!   "code": 200,
//!   "result": {
//!     "songCount": 268,          // when type=1
//!     "songs": [ { "id": 123, "name": "...", "artists": [...], "album": {...} } ],
//!     "albumCount": 5,           // when type=10
//!     "albums": [ ... ],
//!     "artistCount": 3,          // when type=100
//!     "artists": [ ... ],
//!     "playlistCount": 12,       // when type=1000
//!     "playlists": [ ... ]
//!   }
//! }
//! ```

use crate::client::{MusicClient, require};
use crate::request::ApiRequest;
use crate::transport::{Pending, rejected};
use crate::types::SearchType;
use serde_json::Value;

/// Default page size of [`MusicClient::search`].
pub const SEARCH_PAGE: u64 = 30;

impl MusicClient {
    /// Search for songs, albums, artists, playlists, users, MVs, ...
    ///
    /// Returns the `result` object. An empty `keywords` fails with
    /// [`ApiError::MissingParam`](crate::ApiError::MissingParam) without
    /// sending anything.
    pub fn search(
        &self,
        keywords: &str,
        search_type: SearchType,
        offset: u64,
        limit: Option<u64>,
    ) -> Pending<Value> {
        if let Err(err) = require("keywords", keywords) {
            return rejected(err);
        }
        let request = ApiRequest::get("/search")
            .param("keywords", keywords)
            .param("type", search_type.code())
            .param("limit", limit.unwrap_or(SEARCH_PAGE))
            .param("offset", offset);
        self.get_field(request, "result")
    }

    /// Suggestions while typing (`result` with `songs`, `artists`, `albums`, ...).
    pub fn search_suggest(&self, keywords: &str) -> Pending<Value> {
        if let Err(err) = require("keywords", keywords) {
            return rejected(err);
        }
        self.get_field(
            ApiRequest::get("/search/suggest").param("keywords", keywords),
            "result",
        )
    }
}
