//! Configuration management for the live show playlist builder.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use crate::types::FetchLimits;

/// Loads environment variables from `showlist/.env` in the local data directory.
///
/// The directory is created if missing so the build script's `.env.example`
/// has a home. A missing `.env` file is not an error, the process
/// environment alone may be enough.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/showlist/.env`
/// - macOS: `~/Library/Application Support/showlist/.env`
/// - Windows: `%LOCALAPPDATA%/showlist/.env`
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything the application stores locally.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("showlist");
    path
}

/// Address the local OAuth callback server binds to.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Spotify user that owns generated playlists, if configured.
///
/// When unset the owner is looked up from the authenticated profile.
pub fn spotify_user() -> Option<String> {
    env::var("SPOTIFY_USER_ID").ok().filter(|u| !u.is_empty())
}

/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Callback URL registered in the Spotify application settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Scopes requested during authorization, e.g.
/// `playlist-modify-public playlist-modify-private`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Timeout applied to every Spotify request. Defaults to 15 seconds.
pub fn request_timeout() -> Duration {
    Duration::from_secs(env_or("SHOWLIST_REQUEST_TIMEOUT_SECS", 15))
}

/// Per-artist fetch limit constants, overridable through
/// `SHOWLIST_MAX_TRACKS_PER_ARTIST` and `SHOWLIST_ARTIST_FETCH_BUFFER`.
pub fn fetch_limits() -> FetchLimits {
    let defaults = FetchLimits::default();
    FetchLimits {
        max_per_artist: env_or("SHOWLIST_MAX_TRACKS_PER_ARTIST", defaults.max_per_artist),
        buffer: env_or("SHOWLIST_ARTIST_FETCH_BUFFER", defaults.buffer),
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
