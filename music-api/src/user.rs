//! User profile, social graph, history and collection endpoints.
//!
//! Endpoints marked *credentials* send the session cookie; the server answers
//! code `301` when it is missing or expired.
//!
//! | Method | Path | Credentials |
//! |---|---|---|
//! | [`user_detail`](MusicClient::user_detail) | `/user/detail` | |
//! | [`user_playlists`](MusicClient::user_playlists) | `/user/playlist` | |
//! | [`user_record`](MusicClient::user_record) | `/user/record` | yes |
//! | [`like_list`](MusicClient::like_list) | `/likelist` | yes |
//! | [`user_follows`](MusicClient::user_follows) | `/user/follows` | |
//! | [`user_followeds`](MusicClient::user_followeds) | `/user/followeds` | |
//! | [`update_user`](MusicClient::update_user) | `/user/update` | yes |
//! | [`album_sublist`](MusicClient::album_sublist) | `/album/sublist` | yes |
//! | [`artist_sublist`](MusicClient::artist_sublist) | `/artist/sublist` | yes |
//! | [`mv_sublist`](MusicClient::mv_sublist) | `/mv/sublist` | yes |

use crate::client::{MusicClient, require_id, take_field};
use crate::request::ApiRequest;
use crate::transport::{Pending, rejected};
use crate::types::{Playlist, Record, RecordRange, RecordServer, UserUpdate};
use serde_json::Value;

/// Default page size of the follow lists.
pub const FOLLOW_PAGE: u64 = 30;

/// Default page size of the collection ("sublist") endpoints.
pub const SUBLIST_PAGE: u64 = 25;

impl MusicClient {
    /// Public profile of a user (`profile`, `level`, `listenSongs`).
    pub fn user_detail(&self, uid: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/user/detail").param("uid", uid))
    }

    /// Playlists created or subscribed by a user.
    pub fn user_playlists(&self, uid: u64, offset: u64) -> Pending<Vec<Playlist>> {
        if let Err(err) = require_id("uid", uid) {
            return rejected(err);
        }
        let request = ApiRequest::get("/user/playlist")
            .param("uid", uid)
            .param("offset", offset);
        self.get_field(request, "playlist")
    }

    /// Listening history, either all-time or for the last week.
    pub fn user_record(&self, uid: u64, range: RecordRange) -> Pending<Vec<Record>> {
        if let Err(err) = require_id("uid", uid) {
            return rejected(err);
        }
        let request = ApiRequest::get("/user/record")
            .param("uid", uid)
            .param("type", range as u8)
            .credentials();
        self.get_with(request, move |resp| {
            let records: Vec<RecordServer> = take_field(resp, range.field())?;
            Ok(records.into_iter().map(Record::from).collect())
        })
    }

    /// IDs of the tracks a user liked.
    pub fn like_list(&self, uid: u64) -> Pending<Vec<u64>> {
        self.get_field(
            ApiRequest::get("/likelist").param("uid", uid).credentials(),
            "ids",
        )
    }

    /// Users this user follows (`follow`).
    pub fn user_follows(&self, uid: u64, offset: u64, limit: u64) -> Pending<Value> {
        self.get(
            ApiRequest::get("/user/follows")
                .param("uid", uid)
                .param("offset", offset)
                .param("limit", limit),
        )
    }

    /// Users following this user (`followeds`).
    pub fn user_followeds(&self, uid: u64, offset: u64, limit: u64) -> Pending<Value> {
        self.get(
            ApiRequest::get("/user/followeds")
                .param("uid", uid)
                .param("offset", offset)
                .param("limit", limit),
        )
    }

    /// Update the logged-in user's profile.
    pub fn update_user(&self, update: &UserUpdate) -> Pending<Value> {
        let request = ApiRequest::get("/user/update")
            .param("nickname", &update.nickname)
            .param("signature", &update.signature)
            .param("gender", update.gender as u8)
            .param("birthday", update.birthday)
            .param("province", update.province)
            .param("city", update.city)
            .credentials();
        self.get(request)
    }

    /// Albums the logged-in user collected (`data`, `count`, `hasMore`).
    pub fn album_sublist(&self, offset: u64, limit: Option<u64>) -> Pending<Value> {
        self.get(sublist("/album/sublist", offset, limit))
    }

    /// Artists the logged-in user collected.
    pub fn artist_sublist(&self, offset: u64, limit: Option<u64>) -> Pending<Value> {
        self.get(sublist("/artist/sublist", offset, limit))
    }

    /// MVs the logged-in user collected.
    pub fn mv_sublist(&self, offset: u64, limit: Option<u64>) -> Pending<Value> {
        self.get(sublist("/mv/sublist", offset, limit))
    }
}

fn sublist(path: &str, offset: u64, limit: Option<u64>) -> ApiRequest {
    ApiRequest::get(path)
        .param("offset", offset)
        .param("limit", limit.unwrap_or(SUBLIST_PAGE))
        .credentials()
}
