//! Comment endpoints.
//!
//! Reading comments needs no login. Posting and deleting go through `/comment`
//! with `t=1` (send) or `t=0` (delete) and the resource [`CommentType`].

use crate::client::{MusicClient, require};
use crate::request::ApiRequest;
use crate::transport::{Pending, rejected};
use crate::types::{CommentPage, CommentType};
use serde_json::Value;

/// Default page size of the comment listings.
pub const COMMENT_PAGE: u64 = 20;

impl MusicClient {
    /// Comments on a song, 20 per page.
    pub fn song_comments(&self, song_id: u64, offset: u64) -> Pending<CommentPage> {
        self.comments(CommentType::Song, song_id, offset, None)
    }

    /// Comments on an MV, 20 per page.
    pub fn mv_comments(&self, mv_id: u64, offset: u64) -> Pending<CommentPage> {
        self.comments(CommentType::Mv, mv_id, offset, None)
    }

    pub fn playlist_comments(
        &self,
        playlist_id: u64,
        offset: u64,
        limit: Option<u64>,
    ) -> Pending<CommentPage> {
        self.comments(CommentType::Playlist, playlist_id, offset, limit)
    }

    pub fn album_comments(&self, album_id: u64, offset: u64, limit: Option<u64>) -> Pending<CommentPage> {
        self.comments(CommentType::Album, album_id, offset, limit)
    }

    /// One page of comments on any commentable resource.
    ///
    /// `limit` defaults to [`COMMENT_PAGE`].
    pub fn comments(
        &self,
        kind: CommentType,
        id: u64,
        offset: u64,
        limit: Option<u64>,
    ) -> Pending<CommentPage> {
        let request = ApiRequest::get(comment_path(kind))
            .param("id", id)
            .param("limit", limit.unwrap_or(COMMENT_PAGE))
            .param("offset", offset);
        self.get_with(request, |resp| Ok(serde_json::from_value(resp)?))
    }

    /// Post a comment on a resource.
    pub fn send_comment(&self, id: u64, kind: CommentType, content: &str) -> Pending<Value> {
        if let Err(err) = require("content", content) {
            return rejected(err);
        }
        let request = ApiRequest::get("/comment")
            .param("t", 1)
            .param("id", id)
            .param("type", kind.code())
            .param("content", content)
            .credentials();
        self.get(request)
    }

    /// Delete one of the logged-in user's comments.
    pub fn delete_comment(&self, id: u64, kind: CommentType, comment_id: u64) -> Pending<Value> {
        let request = ApiRequest::get("/comment")
            .param("t", 0)
            .param("id", id)
            .param("type", kind.code())
            .param("commentId", comment_id)
            .credentials();
        self.get(request)
    }
}

fn comment_path(kind: CommentType) -> &'static str {
    match kind {
        CommentType::Song => "/comment/music",
        CommentType::Mv => "/comment/mv",
        CommentType::Playlist => "/comment/playlist",
        CommentType::Album => "/comment/album",
        CommentType::Radio => "/comment/dj",
        CommentType::Video => "/comment/video",
        CommentType::Event => "/comment/event",
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::testing::{client_replying, url_of};
    use crate::types::CommentType;
    use serde_json::json;

    fn page() -> serde_json::Value {
        json!({
            "code": 200,
            "total": 2,
            "more": false,
            "hotComments": [],
            "comments": [{
                "commentId": 11,
                "user": { "userId": 1, "nickname": "a", "avatarUrl": "x.jpg" },
                "time": 1_600_000_000_000_u64,
                "content": "first",
                "likedCount": 0,
                "beReplied": []
            }]
        })
    }

    #[tokio::test]
    async fn song_comments_page() {
        let (client, fake) = client_replying(page());
        let page = client.song_comments(186_016, 40).await.unwrap();
        assert_eq!(
            url_of(&fake.last()),
            "http://api.test/comment/music?id=186016&limit=20&offset=40"
        );
        assert_eq!(page.total, 2);
        assert_eq!(page.comments[0].content, "first");
    }

    #[tokio::test]
    async fn each_kind_has_its_path() {
        let (client, fake) = client_replying(page());
        client.mv_comments(1, 0).await.unwrap();
        assert_eq!(fake.last().path(), "/comment/mv");
        client.playlist_comments(1, 0, Some(5)).await.unwrap();
        assert_eq!(
            url_of(&fake.last()),
            "http://api.test/comment/playlist?id=1&limit=5&offset=0"
        );
        client.album_comments(1, 0, None).await.unwrap();
        assert_eq!(fake.last().path(), "/comment/album");
        client.comments(CommentType::Video, 1, 0, None).await.unwrap();
        assert_eq!(fake.last().path(), "/comment/video");
    }

    #[tokio::test]
    async fn send_and_delete() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        client
            .send_comment(5_436_712, CommentType::Mv, "好听")
            .await
            .unwrap();
        let req = fake.last();
        assert!(req.with_credentials());
        assert_eq!(
            url_of(&req),
            "http://api.test/comment?t=1&id=5436712&type=1&content=%E5%A5%BD%E5%90%AC"
        );

        client
            .delete_comment(24_381_616, CommentType::Playlist, 99)
            .await
            .unwrap();
        assert_eq!(
            url_of(&fake.last()),
            "http://api.test/comment?t=0&id=24381616&type=2&commentId=99"
        );
    }

    #[tokio::test]
    async fn empty_comment_is_rejected() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        let err = client.send_comment(1, CommentType::Song, "").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParam("content")));
        assert_eq!(fake.count(), 0);
    }
}
