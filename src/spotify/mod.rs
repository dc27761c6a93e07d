//! # Spotify Integration Module
//!
//! HTTP layer between the playlist generator and the Spotify Web API.
//!
//! ```text
//! Generator (TrackCatalog, PlaylistWriter)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE, token refresh)
//!     ├── Track Search
//!     └── Playlist Operations (Create, Append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! [`SpotifyClient`] implements both generator capabilities so one
//! authenticated client serves a whole run.
//!
//! ## API Coverage
//!
//! - `GET /me` - owner id when `SPOTIFY_USER_ID` is not configured
//! - `GET /search?type=track` - per-artist track search
//! - `POST /users/{user_id}/playlists` - create the playlist
//! - `POST /playlists/{playlist_id}/tracks` - append up to 100 tracks
//! - `POST /api/token` - code exchange and refresh
//!
//! ## Error Handling
//!
//! Requests use the configured timeout and `error_for_status`; any failure
//! is returned once and not retried. Deciding whether a failure is fatal is
//! left to the generator.

pub mod auth;
mod client;
mod playlist;
mod search;

pub use client::SpotifyClient;
