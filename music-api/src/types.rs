//! Data model for the music API.
//!
//! Most records share their shape with the server and deserialize straight
//! from the JSON responses (camelCase on the wire, `snake_case` in Rust).
//! Tracks are the exception: the server abbreviates their field names, so the
//! wire form [`TrackServer`] is converted into the client form [`Track`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A music artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u64,
    pub name: String,
    /// Alternative names (translations, former names).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<String>,
}

/// A user as embedded in comments and follower lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: u64,
    pub nickname: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// An album, as embedded in a track or listed on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub name: String,
    /// Cover image URL. Empty for tracks that are not part of an album.
    #[serde(default)]
    pub pic_url: String,
}

/// One encoding of a track (bitrate, file id, byte size, volume delta).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackQuality {
    pub br: u64,
    #[serde(default)]
    pub fid: u64,
    pub size: u64,
    #[serde(default)]
    pub vd: f64,
}

/// A track in client form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: u64,
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    /// Duration in milliseconds.
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<TrackQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<TrackQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<TrackQuality>,
    /// Music video id, `None` when the track has no MV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mv_id: Option<u64>,
    /// Availability status; negative values mean the track is greyed out.
    pub status: i64,
}

impl Track {
    /// Artist names joined with `/`, the way track lists display them.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// A track as returned by `/song/detail`, `/playlist/detail` and friends.
///
/// | Wire | Client     |
/// |------|------------|
/// | `ar` | `artists`  |
/// | `al` | `album`    |
/// | `dt` | `duration` |
/// | `h`  | `high`     |
/// | `m`  | `middle`   |
/// | `l`  | `low`      |
/// | `mv` | `mv_id`    |
/// | `st` | `status`   |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackServer {
    pub id: u64,
    pub name: String,
    pub ar: Vec<Artist>,
    pub al: Album,
    pub dt: u64,
    #[serde(default)]
    pub h: Option<TrackQuality>,
    #[serde(default)]
    pub m: Option<TrackQuality>,
    #[serde(default)]
    pub l: Option<TrackQuality>,
    #[serde(default)]
    pub mv: u64,
    #[serde(default)]
    pub st: i64,
}

impl From<TrackServer> for Track {
    fn from(t: TrackServer) -> Self {
        Self {
            id: t.id,
            name: t.name,
            artists: t.ar,
            album: t.al,
            duration: t.dt,
            high: t.h,
            middle: t.m,
            low: t.l,
            mv_id: (t.mv != 0).then_some(t.mv),
            status: t.st,
        }
    }
}

/// Owner of a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistCreator {
    pub user_id: u64,
    pub nickname: String,
}

/// A playlist summary.
///
/// Recommendation endpoints call the cover `picUrl`, user and category
/// listings call it `coverImgUrl`; both land in `pic_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: u64,
    #[serde(alias = "coverImgUrl", default)]
    pub pic_url: String,
    pub name: String,
    #[serde(default)]
    pub play_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<PlaylistCreator>,
}

/// A comment on a song, MV, playlist or album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: u64,
    pub user: User,
    /// Unix timestamp in milliseconds.
    pub time: u64,
    pub content: String,
    #[serde(default)]
    pub liked_count: u64,
    /// The comment(s) this one replies to.
    #[serde(default)]
    pub be_replied: Vec<RepliedComment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepliedComment {
    pub be_replied_comment_id: u64,
    /// `None` when the original comment was deleted.
    #[serde(default)]
    pub content: Option<String>,
    pub user: User,
}

/// One page of comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Only present on the first page.
    #[serde(default)]
    pub hot_comments: Vec<Comment>,
}

/// Resource a comment is attached to, as sent in the `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentType {
    Song = 0,
    Mv = 1,
    Playlist = 2,
    Album = 3,
    Radio = 4,
    Video = 5,
    Event = 6,
}

impl CommentType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// An entry of a user's listening history (`/user/record`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub play_count: u64,
    pub score: u64,
    pub song: Track,
}

/// Wire form of [`Record`]; its `song` is an abbreviated track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordServer {
    pub play_count: u64,
    pub score: u64,
    pub song: TrackServer,
}

impl From<RecordServer> for Record {
    fn from(r: RecordServer) -> Self {
        Self {
            play_count: r.play_count,
            score: r.score,
            song: r.song.into(),
        }
    }
}

/// Music video detail (`/mv/detail`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mv {
    pub id: u64,
    pub name: String,
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub play_count: u64,
    #[serde(default)]
    pub sub_count: u64,
    #[serde(default)]
    pub share_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    /// Duration in milliseconds.
    #[serde(default)]
    pub duration: u64,
    /// Stream URL per vertical resolution (`240`, `480`, `720`, `1080`).
    #[serde(default)]
    pub brs: BTreeMap<u32, String>,
}

impl Mv {
    /// Highest available resolution and its stream URL.
    pub fn best_stream(&self) -> Option<(u32, &str)> {
        self.brs
            .iter()
            .next_back()
            .map(|(res, url)| (*res, url.as_str()))
    }
}

/// Lyrics of a track in LRC format (`[00:12.34]line`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lyric {
    /// Original lyrics. `None` for instrumentals or tracks without lyrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lrc: Option<String>,
    /// Translated lyrics, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlyric: Option<String>,
}

/// Kind of media a card links to; the value is the route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaCardType {
    #[serde(rename = "playlist")]
    Playlist,
    #[serde(rename = "mvplay")]
    Mv,
    #[serde(rename = "album")]
    Album,
    #[serde(rename = "djradio")]
    DjRadio,
}

impl MediaCardType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playlist => "playlist",
            Self::Mv => "mvplay",
            Self::Album => "album",
            Self::DjRadio => "djradio",
        }
    }
}

impl fmt::Display for MediaCardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cover card shown in grids of playlists, albums, MVs and radios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCardItem {
    #[serde(rename = "type")]
    pub kind: MediaCardType,
    pub pic_url: String,
    pub title: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,
    /// CSS aspect ratio of the cover, e.g. `16/9`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<String>,
}

impl MediaCardItem {
    /// Card for a playlist; the subtitle links to the creator's page.
    pub fn from_playlist(pl: &Playlist, kind: MediaCardType) -> Self {
        Self {
            kind,
            pic_url: pl.pic_url.clone(),
            title: pl.name.clone(),
            id: pl.id,
            sub_title: pl.creator.as_ref().map(|c| c.nickname.clone()),
            sub_link: pl.creator.as_ref().map(|c| format!("/user/{}", c.user_id)),
            play_count: Some(pl.play_count),
            ratio: None,
        }
    }
}

/// Search target, mapped to the API `type` parameter.
///
/// | Variant    | API value |
/// |------------|-----------|
/// | `Song`     | 1         |
/// | `Album`    | 10        |
/// | `Artist`   | 100       |
/// | `Playlist` | 1000      |
/// | `User`     | 1002      |
/// | `Mv`       | 1004      |
/// | `Lyric`    | 1006      |
/// | `Radio`    | 1009      |
/// | `Video`    | 1014      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    #[default]
    Song = 1,
    Album = 10,
    Artist = 100,
    Playlist = 1000,
    User = 1002,
    Mv = 1004,
    Lyric = 1006,
    Radio = 1009,
    Video = 1014,
}

impl SearchType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Sort order for the curated playlist listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaylistOrder {
    #[default]
    Hot,
    New,
}

impl fmt::Display for PlaylistOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hot => "hot",
            Self::New => "new",
        })
    }
}

/// `t` parameter of `/playlist/subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeAction {
    Subscribe = 1,
    Unsubscribe = 2,
}

/// `type` parameter of `/user/record`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordRange {
    /// `allData`: all-time ranking.
    #[default]
    AllTime = 0,
    /// `weekData`: the last seven days.
    Week = 1,
}

impl RecordRange {
    /// Response field holding the records for this range.
    pub fn field(self) -> &'static str {
        match self {
            Self::AllTime => "allData",
            Self::Week => "weekData",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Secret = 0,
    Male = 1,
    Female = 2,
}

/// Profile fields sent to `/user/update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub nickname: String,
    pub signature: String,
    pub gender: Gender,
    /// Unix timestamp in milliseconds.
    pub birthday: i64,
    /// Province administrative code.
    pub province: u32,
    /// City administrative code.
    pub city: u32,
}
