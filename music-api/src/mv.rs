//! Music video endpoints.

use crate::client::MusicClient;
use crate::request::ApiRequest;
use crate::transport::Pending;
use crate::types::Mv;
use serde_json::Value;

/// Number of MVs recommended on the home page.
pub const PERSONALIZED_MV_LIMIT: u64 = 6;

/// Default size of the MV chart.
pub const MV_RANK_LIMIT: u64 = 10;

impl MusicClient {
    /// Latest MVs (`data`).
    pub fn new_mvs(&self) -> Pending<Value> {
        self.get(ApiRequest::get("/mv/first"))
    }

    /// MVs recommended on the home page (`result`).
    pub fn personalized_mvs(&self) -> Pending<Value> {
        self.get(ApiRequest::get("/personalized/mv").param("limit", PERSONALIZED_MV_LIMIT))
    }

    /// MV detail with its stream URLs per resolution.
    pub fn mv_detail(&self, mv_id: u64) -> Pending<Mv> {
        self.get_field(ApiRequest::get("/mv/detail").param("mvid", mv_id), "data")
    }

    /// MVs similar to the given one (`mvs`).
    pub fn similar_mvs(&self, mv_id: u64) -> Pending<Value> {
        self.get(ApiRequest::get("/simi/mv").param("mvid", mv_id))
    }

    /// MV chart; `limit` defaults to [`MV_RANK_LIMIT`].
    pub fn mv_rank(&self, limit: Option<u64>) -> Pending<Value> {
        self.get(ApiRequest::get("/top/mv").param("limit", limit.unwrap_or(MV_RANK_LIMIT)))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{client_replying, url_of};
    use serde_json::json;

    #[tokio::test]
    async fn mv_detail_decodes_data() {
        let (client, fake) = client_replying(json!({
            "code": 200,
            "data": {
                "id": 5_436_712, "name": "告白气球",
                "artists": [{ "id": 6452, "name": "周杰伦" }],
                "cover": "c.jpg", "playCount": 10, "subCount": 2, "shareCount": 1,
                "likeCount": 4, "commentCount": 3, "duration": 215_000,
                "brs": { "480": "sd.mp4", "720": "hd.mp4" }
            }
        }));
        let mv = client.mv_detail(5_436_712).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/mv/detail?mvid=5436712");
        assert_eq!(mv.comment_count, 3);
        assert_eq!(mv.best_stream(), Some((720, "hd.mp4")));
    }

    #[tokio::test]
    async fn listing_paths() {
        let (client, fake) = client_replying(json!({ "code": 200 }));
        client.new_mvs().await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/mv/first");
        client.personalized_mvs().await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/personalized/mv?limit=6");
        client.similar_mvs(42).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/simi/mv?mvid=42");
        client.mv_rank(None).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/top/mv?limit=10");
        client.mv_rank(Some(50)).await.unwrap();
        assert_eq!(url_of(&fake.last()), "http://api.test/top/mv?limit=50");
    }
}
