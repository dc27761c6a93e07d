//! # CLI Module
//!
//! User-facing commands of `showlist`. Each command loads what it needs
//! (token, events file, history), delegates to the generator or the Spotify
//! layer, and reports progress with the crate's status macros.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth flow with PKCE; stores the token locally
//! - [`generate`] - builds a playlist from an events file, or with
//!   `--dry-run` only prints the planned track order
//! - [`history`] - lists previously generated playlists
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Generator (selection and distribution)
//!     ↓
//! Spotify Integration / Management (token + history caches)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! showlist auth
//! showlist generate --events shows.json --city Austin --state TX
//! showlist generate --events shows.json --discovery --dry-run
//! showlist history
//! ```
//!
//! Fatal problems end the process through `error!`; a single artist whose
//! search fails only produces a warning.

mod auth;
mod generate;
mod history;

pub use auth::auth;
pub use generate::GenerateRequest;
pub use generate::generate;
pub use generate::generation_options;
pub use history::history;
