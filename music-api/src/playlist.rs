//! Playlist API.
//!
//! ## `playlist_detail` — `GET /playlist/detail?id=123456`
//!
//! Response:
//! ```json
//! {
//!   "code": 200,
//!   "playlist": {
//!     "id": 123456,
//!     "name": "...",
//!     "coverImgUrl": "https://...",
//!     "trackCount": 50,
//!     "creator": { "userId": 789, "nickname": "..." },
//!     "tracks": [ { "id": 1, "name": "...", "ar": [...], "al": {...}, "dt": 240000 } ]
//!   }
//! }
//! ```
//!
//! `tracks` uses the abbreviated track form; see [`TrackServer`].

use crate::client::{MusicClient, take_field};
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::{Pending, rejected};
use crate::types::{Playlist, SubscribeAction, Track, TrackServer};
use serde::Deserialize;
use serde_json::Value;

/// Default page size of [`MusicClient::playlist_subscribers`].
pub const SUBSCRIBER_PAGE: u64 = 30;

/// A playlist with its description and tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistDetail {
    pub playlist: Playlist,
    pub description: Option<String>,
    pub track_count: u64,
    pub tracks: Vec<Track>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistDetailServer {
    #[serde(flatten)]
    playlist: Playlist,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    track_count: u64,
    #[serde(default)]
    tracks: Vec<TrackServer>,
}

impl From<PlaylistDetailServer> for PlaylistDetail {
    fn from(p: PlaylistDetailServer) -> Self {
        Self {
            playlist: p.playlist,
            description: p.description,
            track_count: p.track_count,
            tracks: p.tracks.into_iter().map(Track::from).collect(),
        }
    }
}

impl MusicClient {
    /// Playlist metadata and its tracks.
    pub fn playlist_detail(&self, playlist_id: u64) -> Pending<PlaylistDetail> {
        let request = ApiRequest::get("/playlist/detail").param("id", playlist_id);
        self.get_with(request, |resp| {
            let detail: PlaylistDetailServer = take_field(resp, "playlist")?;
            Ok(detail.into())
        })
    }

    /// Subscribe to or unsubscribe from a playlist.
    pub fn subscribe_playlist(&self, playlist_id: u64, action: SubscribeAction) -> Pending<Value> {
        let request = ApiRequest::get("/playlist/subscribe")
            .param("id", playlist_id)
            .param("t", action as u8)
            .credentials();
        self.get(request)
    }

    /// Users subscribed to a playlist (`subscribers`, `total`, `more`).
    pub fn playlist_subscribers(
        &self,
        playlist_id: u64,
        offset: u64,
        limit: Option<u64>,
    ) -> Pending<Value> {
        let request = ApiRequest::get("/playlist/subscribers")
            .param("id", playlist_id)
            .param("offset", offset)
            .param("limit", limit.unwrap_or(SUBSCRIBER_PAGE));
        self.get(request)
    }

    /// Append tracks to one of the logged-in user's playlists.
    pub fn add_to_playlist(&self, playlist_id: u64, track_ids: &[u64]) -> Pending<Value> {
        if track_ids.is_empty() {
            return rejected(ApiError::MissingParam("tracks"));
        }
        let tracks = track_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let request = ApiRequest::get("/playlist/tracks")
            .param("op", "add")
            .param("pid", playlist_id)
            .param("tracks", tracks)
            .credentials();
        self.get(request)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::testing::{client_replying, url_of};
    use crate::types::SubscribeAction;
    use serde_json::json;

    #[tokio::test]
    async fn playlist_detail_converts_tracks() {
        let (client, fake) = client_replying(json!({
            "code": 200,
            "playlist": {
                "id": 3_778_678, "name": "热歌榜", "coverImgUrl": "c.jpg",
                "playCount": 100, "trackCount": 1, "description": null,
                "creator": { "userId": 1, "nickname": "网易云音乐" },
                "tracks": [{
                    "id": 1, "name": "t", "ar": [{ "id": 2, "name": "a" }],
                    "al": { "id": 3, "name": "al", "picUrl": "p.jpg" }, "dt": 1000
                }]
            }
        }));
        let detail = client.playlist_detail(3_778_678).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/playlist/detail?id=3778678");
        assert_eq!(detail.playlist.pic_url, "c.jpg");
        assert_eq!(detail.playlist.creator.unwrap().nickname, "网易云音乐");
        assert_eq!(detail.description, None);
        assert_eq!(detail.track_count, 1);
        assert_eq!(detail.tracks[0].album.pic_url, "p.jpg");
    }

    #[tokio::test]
    async fn subscribe_uses_action_code() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        client
            .subscribe_playlist(24_381_616, SubscribeAction::Unsubscribe)
            .await
            .unwrap();
        let req = fake.last();
        assert!(req.with_credentials());
        assert_eq!(url_of(&req), "http://api.test/playlist/subscribe?id=24381616&t=2");
    }

    #[tokio::test]
    async fn subscribers_default_page() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        client.playlist_subscribers(7, 0, None).await.unwrap();
        assert_eq!(
            url_of(&fake.last()),
            "http://api.test/playlist/subscribers?id=7&offset=0&limit=30"
        );
    }

    #[tokio::test]
    async fn add_tracks_joins_ids() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        client.add_to_playlist(24_381_616, &[347_230]).await.unwrap();
        assert_eq!(fake.last().query_value("tracks"), Some("347230"));

        client.add_to_playlist(24_381_616, &[1, 2, 3]).await.unwrap();
        let req = fake.last();
        assert!(req.with_credentials());
        assert_eq!(
            url_of(&req),
            "http://api.test/playlist/tracks?op=add&pid=24381616&tracks=1%2C2%2C3"
        );
    }

    #[tokio::test]
    async fn add_without_tracks_fails_before_sending() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        let err = client.add_to_playlist(1, &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParam("tracks")));
        assert_eq!(fake.count(), 0);
    }
}
