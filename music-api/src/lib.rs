//! Cloud music API client library.
//!
//! Talks to a NeteaseCloudMusicApi-compatible HTTP server: every endpoint is a
//! `GET` with query parameters answering a JSON envelope with a `code` field.
//! Each [`MusicClient`] method builds one request and returns a [`Pending`]
//! result that can be awaited as is, or wrapped with
//! [`make_cancelable`](cancel::make_cancelable) so that a caller who no longer
//! cares about it never receives a stale outcome.
//!
//! ```no_run
//! use music_api::MusicClient;
//! use music_api::cancel::make_cancelable;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MusicClient::new()?;
//! let (tracks, cancel) = make_cancelable(client.song_detail(186_016));
//! # let user_left_page = false;
//! if user_left_page {
//!     cancel.cancel();
//! }
//! match tracks.await {
//!     Ok(tracks) => println!("{}", tracks[0].name),
//!     Err(e) if e.is_canceled() => {}
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The server address and timeout come from
//! `~/.config/cloud-music/config.json` (see [`config`]); the login cookie is
//! kept in `~/.config/cloud-music/session.json` (see [`auth`]).
//!
//! # API endpoint mapping
//!
//! | Area | Module methods |
//! |------|----------------|
//! | Banners, recommendations, charts | `banner`, `recommend_playlists`, `playlist_catlist`, `top_playlists`, `top_list` |
//! | Tracks | `song_url`, `song_detail`, `lyric`, `similar_songs` |
//! | Artists and albums | `artist_desc`, `artist_info`, `artist_albums`, `album_detail` |
//! | MVs | `new_mvs`, `personalized_mvs`, `mv_detail`, `similar_mvs`, `mv_rank` |
//! | Search | `search`, `search_suggest` |
//! | Login | `login_email`, `login_phone`, `logout`, `login_status` |
//! | Users | `user_detail`, `user_playlists`, `user_record`, `like_list`, `user_follows`, `user_followeds`, `update_user`, `*_sublist` |
//! | Playlists | `playlist_detail`, `subscribe_playlist`, `playlist_subscribers`, `add_to_playlist` |
//! | Comments | `song_comments`, `mv_comments`, `playlist_comments`, `album_comments`, `send_comment`, `delete_comment` |

mod artist;
pub mod auth;
pub mod cancel;
pub mod client;
pub mod comment;
pub mod config;
pub mod discover;
pub mod error;
pub mod login;
pub mod mv;
pub mod playlist;
pub mod request;
pub mod search;
mod track;
pub mod transport;
pub mod types;
pub mod user;

#[cfg(test)]
mod testing;

pub use cancel::{CancelError, CancelHandle, Cancelable, make_cancelable};
pub use client::MusicClient;
pub use error::{ApiError, Result};
pub use transport::{Pending, Transport};
