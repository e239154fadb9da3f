//! Discovery endpoints: banners, recommendations, categories and charts.
//!
//! | Method | Path |
//! |---|---|
//! | [`banner`](MusicClient::banner) | `/banner` |
//! | [`recommend_playlists`](MusicClient::recommend_playlists) | `/personalized` |
//! | [`playlist_catlist`](MusicClient::playlist_catlist) | `/playlist/catlist` |
//! | [`top_playlists`](MusicClient::top_playlists) | `/top/playlist` |
//! | [`top_list`](MusicClient::top_list) | `/top/list` |

use crate::client::MusicClient;
use crate::request::ApiRequest;
use crate::transport::Pending;
use crate::types::{Playlist, PlaylistOrder};
use serde_json::Value;

/// Category meaning "every style" in the curated playlist listing.
pub const ALL_CATEGORIES: &str = "全部";

/// Page size of [`MusicClient::top_playlists`].
pub const TOP_PLAYLIST_PAGE: u64 = 20;

impl MusicClient {
    /// Home page carousel banners (`banners`).
    pub fn banner(&self) -> Pending<Value> {
        self.get(ApiRequest::get("/banner"))
    }

    /// Recommended playlists for the home page.
    pub fn recommend_playlists(&self) -> Pending<Vec<Playlist>> {
        self.get_field(ApiRequest::get("/personalized"), "result")
    }

    /// Playlist style categories (`all`, `categories`, `sub`).
    pub fn playlist_catlist(&self) -> Pending<Value> {
        self.get(ApiRequest::get("/playlist/catlist"))
    }

    /// Curated playlists of one style, 20 per page.
    ///
    /// `cat` defaults to [`ALL_CATEGORIES`].
    pub fn top_playlists(
        &self,
        cat: Option<&str>,
        order: PlaylistOrder,
        offset: u64,
    ) -> Pending<Vec<Playlist>> {
        let request = ApiRequest::get("/top/playlist")
            .param("limit", TOP_PLAYLIST_PAGE)
            .param("cat", cat.unwrap_or(ALL_CATEGORIES))
            .param("order", order)
            .param("offset", offset);
        self.get_field(request, "playlists")
    }

    /// One of the official charts, selected by index (0 = new songs, 3 = hot).
    pub fn top_list(&self, idx: u32) -> Pending<Value> {
        self.get(ApiRequest::get("/top/list").param("idx", idx))
    }
}
