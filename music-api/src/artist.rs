//! Artist and album endpoints.

use crate::client::MusicClient;
use crate::request::ApiRequest;
use crate::transport::Pending;
use serde_json::Value;

impl MusicClient {
    /// Artist biography (`briefDesc`, `introduction`).
    pub fn artist_desc(&self, artist_id: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/artist/desc").param("id", artist_id))
    }

    /// Artist profile and top songs (`artist`, `hotSongs`).
    pub fn artist_info(&self, artist_id: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/artists").param("id", artist_id))
    }

    /// Albums released by an artist (`hotAlbums`).
    pub fn artist_albums(&self, artist_id: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/artist/album").param("id", artist_id))
    }

    /// Album metadata and track list (`album`, `songs`).
    pub fn album_detail(&self, album_id: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/album").param("id", album_id))
    }
}
