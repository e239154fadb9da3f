//! Track endpoints: playback URL, detail, lyrics and similar songs.
//!
//! # Endpoints
//!
//! ## `song_url` — `GET /song/url?id=123`
//!
//! ```json
//! {
//!   "code": 200,
//!   "data": [{ "id": 123, "url": "https://m701.music.126.net/...", "br": 320000 }]
//! }
//! ```
//!
//! `url` is `null` when the track requires VIP/purchase or is region-locked.
//!
//! ## `song_detail` — `GET /song/detail?ids=123`
//!
//! ```json
//! {
//!   "code": 200,
//!   "songs": [{ "id": 123, "name": "...", "ar": [...], "al": {...}, "dt": 240000 }]
//! }
//! ```
//!
//! ## `lyric` — `GET /lyric?id=123`
//!
//! ```json
//! {
//!   "code": 200,
//!   "lrc":    { "lyric": "[00:00.00]..." },
//!   "tlyric": { "lyric": "[00:00.00]..." }
//! }
//! ```

use crate::client::{MusicClient, take_field};
use crate::request::ApiRequest;
use crate::transport::Pending;
use crate::types::{Lyric, Track, TrackServer};
use serde_json::Value;

impl MusicClient {
    /// Playback URL info for a track (`data[0].url`, may be `null`).
    pub fn song_url(&self, song_id: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/song/url").param("id", song_id))
    }

    /// Track metadata, converted from the abbreviated wire form.
    pub fn song_detail(&self, song_id: u64) -> Pending<Vec<Track>> {
        let request = ApiRequest::get("/song/detail").param("ids", song_id);
        self.get_with(request, |resp| {
            let songs: Vec<TrackServer> = take_field(resp, "songs")?;
            Ok(songs.into_iter().map(Track::from).collect())
        })
    }

    /// Lyrics of a track. Both fields are `None` for instrumentals.
    pub fn lyric(&self, song_id: u64) -> Pending<Lyric> {
        self.get_with(ApiRequest::get("/lyric").param("id", song_id), |resp| {
            Ok(Lyric {
                lrc: lyric_text(&resp["lrc"]),
                tlyric: lyric_text(&resp["tlyric"]),
            })
        })
    }

    /// Songs similar to the given one (`songs`).
    pub fn similar_songs(&self, song_id: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/simi/song").param("id", song_id))
    }
}

fn lyric_text(v: &Value) -> Option<String> {
    v["lyric"]
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use crate::testing::{client_replying, url_of};
    use serde_json::json;

    #[tokio::test]
    async fn song_detail_converts_tracks() {
        let (client, fake) = client_replying(json!({
            "code": 200,
            "songs": [{
                "id": 186_016, "name": "晴天",
                "ar": [{ "id": 6452, "name": "周杰伦" }],
                "al": { "id": 18_905, "name": "叶惠美", "picUrl": "x.jpg" },
                "dt": 269_000, "mv": 0, "st": 0
            }]
        }));
        let tracks = client.song_detail(186_016).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/song/detail?ids=186016");
        assert_eq!(tracks[0].artists[0].name, "周杰伦");
        assert_eq!(tracks[0].duration, 269_000);
        assert_eq!(tracks[0].mv_id, None);
    }

    #[tokio::test]
    async fn lyric_blank_sections_are_none() {
        let (client, fake) = client_replying(json!({
            "code": 200,
            "lrc": { "lyric": "[00:01.00]故事的小黄花" },
            "tlyric": { "lyric": "" }
        }));
        let lyric = client.lyric(186_016).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/lyric?id=186016");
        assert_eq!(lyric.lrc.as_deref(), Some("[00:01.00]故事的小黄花"));
        assert_eq!(lyric.tlyric, None);
    }

    #[tokio::test]
    async fn lyric_absent_for_instrumental() {
        let (client, _fake) = client_replying(json!({ "code": 200, "nolyric": true }));
        let lyric = client.lyric(1).await.unwrap();
        assert_eq!(lyric, crate::types::Lyric::default());
    }

    #[tokio::test]
    async fn url_and_similar_paths() {
        let (client, fake) = client_replying(json!({ "code": 200, "data": [] }));
        client.song_url(33_894_312).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/song/url?id=33894312");
        client.similar_songs(33_894_312).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/simi/song?id=33894312");
    }
}
