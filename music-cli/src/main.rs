use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use music_api::auth::Session;
use music_api::config::ClientConfig;
use music_api::login::DEFAULT_COUNTRY_CODE;
use music_api::types::{CommentType, PlaylistOrder, SearchType};
use music_api::{CancelError, MusicClient, Pending, make_cancelable};
use serde_json::Value;
use std::io;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "cloud-music",
    version,
    about = "Command-line client for a cloud music API server"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with email or phone and save the session cookie
    Login {
        /// Account email
        #[arg(long, conflicts_with = "phone")]
        email: Option<String>,
        /// Account phone number
        #[arg(long)]
        phone: Option<String>,
        /// Account password
        #[arg(short, long, required_unless_present = "check")]
        password: Option<String>,
        /// Country calling code (with --phone)
        #[arg(long, default_value_t = DEFAULT_COUNTRY_CODE)]
        countrycode: u16,
        /// Check current login status instead
        #[arg(long)]
        check: bool,
    },
    /// Log out and clear the saved session
    Logout,
    /// Search for songs, albums, artists, or playlists
    Search {
        /// Search keyword
        keyword: String,
        /// Search type
        #[arg(short = 't', long, default_value = "song")]
        r#type: SearchKind,
        /// Max results
        #[arg(short, long, default_value = "30")]
        limit: u64,
        /// Result offset
        #[arg(short, long, default_value = "0")]
        offset: u64,
    },
    /// Show track details
    Info {
        /// Track ID
        track_id: u64,
    },
    /// Get track lyrics
    Lyric {
        /// Track ID
        track_id: u64,
    },
    /// Print the playback URL of a track
    Url {
        /// Track ID
        track_id: u64,
    },
    /// Show playlist details
    Playlist {
        /// Playlist ID
        playlist_id: u64,
    },
    /// Show comments on a song, MV, playlist, or album
    Comments {
        /// Resource kind
        #[arg(value_enum)]
        kind: CommentKind,
        /// Resource ID
        id: u64,
        /// Comment offset
        #[arg(short, long, default_value = "0")]
        offset: u64,
    },
    /// List curated playlists
    Top {
        /// Style category (default: all)
        #[arg(short, long)]
        cat: Option<String>,
        /// Sort by popularity or recency
        #[arg(long, default_value = "hot")]
        order: OrderArg,
        /// Playlist offset
        #[arg(short, long, default_value = "0")]
        offset: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SearchKind {
    Song,
    Album,
    Artist,
    Playlist,
}

#[derive(Clone, Copy, ValueEnum)]
enum CommentKind {
    Song,
    Mv,
    Playlist,
    Album,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Hot,
    New,
}

impl From<SearchKind> for SearchType {
    fn from(k: SearchKind) -> Self {
        match k {
            SearchKind::Song => Self::Song,
            SearchKind::Album => Self::Album,
            SearchKind::Artist => Self::Artist,
            SearchKind::Playlist => Self::Playlist,
        }
    }
}

impl From<CommentKind> for CommentType {
    fn from(k: CommentKind) -> Self {
        match k {
            CommentKind::Song => Self::Song,
            CommentKind::Mv => Self::Mv,
            CommentKind::Playlist => Self::Playlist,
            CommentKind::Album => Self::Album,
        }
    }
}

impl From<OrderArg> for PlaylistOrder {
    fn from(o: OrderArg) -> Self {
        match o {
            OrderArg::Hot => Self::Hot,
            OrderArg::New => Self::New,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Login {
            email,
            phone,
            password,
            countrycode,
            check,
        } => {
            if check {
                cmd_login_check().await
            } else {
                cmd_login(email, phone, password, countrycode).await
            }
        }
        Command::Logout => cmd_logout().await,
        Command::Search {
            keyword,
            r#type,
            limit,
            offset,
        } => cmd_search(&keyword, r#type, limit, offset).await,
        Command::Info { track_id } => cmd_info(track_id).await,
        Command::Lyric { track_id } => cmd_lyric(track_id).await,
        Command::Url { track_id } => cmd_url(track_id).await,
        Command::Playlist { playlist_id } => cmd_playlist(playlist_id).await,
        Command::Comments { kind, id, offset } => cmd_comments(kind, id, offset).await,
        Command::Top { cat, order, offset } => cmd_top(cat.as_deref(), order, offset).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn client() -> Result<MusicClient> {
    MusicClient::new().context("failed to create API client")
}

/// Await a request; on Ctrl-C its outcome is discarded and `None` is returned.
async fn fetch<T: Send + 'static>(pending: Pending<T>) -> Result<Option<T>> {
    fetch_until(pending, tokio::signal::ctrl_c()).await
}

/// Await `pending` unless `interrupt` fires first. An `interrupt` that fails
/// (no signal handler could be installed) never cancels the request.
async fn fetch_until<T, I>(pending: Pending<T>, interrupt: I) -> Result<Option<T>>
where
    T: Send + 'static,
    I: Future<Output = io::Result<()>>,
{
    let (mut outcome, cancel) = make_cancelable(pending);
    tokio::select! {
        result = &mut outcome => match result {
            Ok(value) => Ok(Some(value)),
            Err(CancelError::Failed(err)) => Err(err.into()),
            Err(CancelError::Canceled) => Ok(None),
        },
        Ok(()) = interrupt => {
            cancel.cancel();
            warn!("interrupted, discarding the pending response");
            eprintln!("Canceled.");
            Ok(None)
        }
    }
}

// ── login / logout ──

async fn cmd_login_check() -> Result<()> {
    let session = Session::load()?;
    if !session.is_logged_in() {
        println!("Not logged in.");
        return Ok(());
    }
    let client = MusicClient::with_config(&ClientConfig::load()?, session)?;
    match fetch(client.login_status()).await {
        Ok(Some(status)) => {
            let profile = &status["data"]["profile"];
            if profile.is_null() {
                println!("Session exists but has expired.");
            } else {
                println!(
                    "Logged in as: {} (id={})",
                    profile["nickname"].as_str().unwrap_or("?"),
                    profile["userId"]
                );
            }
        }
        Ok(None) => {}
        Err(e) => println!("Session exists but validation failed: {e}"),
    }
    Ok(())
}

async fn cmd_login(
    email: Option<String>,
    phone: Option<String>,
    password: Option<String>,
    countrycode: u16,
) -> Result<()> {
    let password = password.context("password required")?;
    let client = MusicClient::with_config(&ClientConfig::load()?, Session::default())?;
    let pending = match (email, phone) {
        (Some(email), _) => client.login_email(&email, &password),
        (None, Some(phone)) => client.login_phone(&phone, &password, countrycode),
        (None, None) => bail!("either --email or --phone is required"),
    };
    let Some(resp) = fetch(pending).await? else {
        return Ok(());
    };
    let session =
        Session::from_login_response(&resp).context("login response carried no cookie")?;
    session.save()?;
    match resp["profile"]["nickname"].as_str() {
        Some(nickname) => println!("Logged in as {nickname}. Session saved."),
        None => println!("Session saved."),
    }
    Ok(())
}

async fn cmd_logout() -> Result<()> {
    if let Err(e) = fetch(client()?.logout()).await {
        warn!("server logout failed: {e}");
    }
    Session::clear()?;
    println!("Session cleared.");
    Ok(())
}

// ── search ──

async fn cmd_search(keyword: &str, kind: SearchKind, limit: u64, offset: u64) -> Result<()> {
    let client = client()?;
    let Some(result) = fetch(client.search(keyword, kind.into(), offset, Some(limit))).await?
    else {
        return Ok(());
    };

    let (count_key, list_key) = match kind {
        SearchKind::Song => ("songCount", "songs"),
        SearchKind::Album => ("albumCount", "albums"),
        SearchKind::Artist => ("artistCount", "artists"),
        SearchKind::Playlist => ("playlistCount", "playlists"),
    };
    println!("Total: {}\n", result[count_key].as_u64().unwrap_or(0));

    for item in result[list_key].as_array().into_iter().flatten() {
        let id = &item["id"];
        let name = item["name"].as_str().unwrap_or("");
        match kind {
            SearchKind::Song => println!(
                "  [{id}] {} - {name} ({})",
                joined_names(&item["artists"]),
                item["album"]["name"].as_str().unwrap_or(""),
            ),
            SearchKind::Playlist => println!(
                "  [{id}] {name} ({} tracks)",
                item["trackCount"].as_u64().unwrap_or(0)
            ),
            SearchKind::Album | SearchKind::Artist => println!("  [{id}] {name}"),
        }
    }
    Ok(())
}

fn joined_names(artists: &Value) -> String {
    artists
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|a| a["name"].as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ── info / lyric / url ──

async fn cmd_info(track_id: u64) -> Result<()> {
    let client = client()?;
    let Some(tracks) = fetch(client.song_detail(track_id)).await? else {
        return Ok(());
    };
    let t = tracks
        .into_iter()
        .next()
        .with_context(|| format!("track not found: {track_id}"))?;
    println!("Track:    {} (id={})", t.name, t.id);
    println!("Artists:  {}", t.artist_names());
    println!("Album:    {} (id={})", t.album.name, t.album.id);
    println!(
        "Duration: {}:{:02}",
        t.duration / 60000,
        (t.duration / 1000) % 60
    );
    if let Some(mv) = t.mv_id {
        println!("MV:       {mv}");
    }
    Ok(())
}

async fn cmd_lyric(track_id: u64) -> Result<()> {
    let client = client()?;
    let Some(lyric) = fetch(client.lyric(track_id)).await? else {
        return Ok(());
    };
    if let Some(lrc) = &lyric.lrc {
        println!("{lrc}");
    }
    if let Some(tlyric) = &lyric.tlyric {
        println!("\n--- Translation ---\n{tlyric}");
    }
    if lyric.lrc.is_none() && lyric.tlyric.is_none() {
        println!("No lyrics available.");
    }
    Ok(())
}

async fn cmd_url(track_id: u64) -> Result<()> {
    let client = client()?;
    let Some(resp) = fetch(client.song_url(track_id)).await? else {
        return Ok(());
    };
    match resp["data"][0]["url"].as_str() {
        Some(url) => println!("{url}"),
        None => println!("Track unavailable (no copyright or VIP required)."),
    }
    Ok(())
}

// ── playlist / top ──

async fn cmd_playlist(playlist_id: u64) -> Result<()> {
    let client = client()?;
    let Some(detail) = fetch(client.playlist_detail(playlist_id)).await? else {
        return Ok(());
    };
    let p = &detail.playlist;
    println!("Playlist: {} (id={})", p.name, p.id);
    println!("Tracks:   {}", detail.track_count);
    if let Some(desc) = &detail.description {
        println!("Desc:     {desc}");
    }
    if let Some(creator) = &p.creator {
        println!("Creator:  {} (id={})", creator.nickname, creator.user_id);
    }
    if !detail.tracks.is_empty() {
        println!();
        for t in &detail.tracks {
            println!("  [{}] {} - {}", t.id, t.artist_names(), t.name);
        }
    }
    Ok(())
}

async fn cmd_top(cat: Option<&str>, order: OrderArg, offset: u64) -> Result<()> {
    let client = client()?;
    let Some(lists) = fetch(client.top_playlists(cat, order.into(), offset)).await? else {
        return Ok(());
    };
    for p in &lists {
        let by = p.creator.as_ref().map_or("", |c| c.nickname.as_str());
        println!("  [{}] {} ({} plays) {by}", p.id, p.name, p.play_count);
    }
    Ok(())
}

// ── comments ──

async fn cmd_comments(kind: CommentKind, id: u64, offset: u64) -> Result<()> {
    let client = client()?;
    let Some(page) = fetch(client.comments(kind.into(), id, offset, None)).await? else {
        return Ok(());
    };
    println!("Total: {}\n", page.total);
    if !page.hot_comments.is_empty() {
        println!("--- Hot ---");
        for c in &page.hot_comments {
            println!("  {} ({} likes): {}", c.user.nickname, c.liked_count, c.content);
        }
        println!("--- Latest ---");
    }
    for c in &page.comments {
        println!("  {} ({} likes): {}", c.user.nickname, c.liked_count, c.content);
        for r in &c.be_replied {
            let quoted = r.content.as_deref().unwrap_or("(deleted)");
            println!("      > {}: {quoted}", r.user.nickname);
        }
    }
    if page.more {
        println!("\nMore: --offset {}", offset + page.comments.len() as u64);
    }
    Ok(())
}
