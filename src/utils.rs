use std::{collections::HashSet, path::Path};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDate;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{FetchLimits, SourceEvent};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Artist names of `events` without duplicates, in first-seen order.
///
/// Names are compared exactly, so "Muna" and "MUNA" stay two artists.
pub fn distinct_artists(events: &[SourceEvent]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|e| seen.insert(e.artist_name.as_str()))
        .map(|e| e.artist_name.clone())
        .collect()
}

/// Number of tracks to request per artist.
///
/// `min(max_per_artist, max_tracks / artist_count + buffer)`; the buffer
/// leaves room for artists that come back short.
pub fn per_artist_limit(max_tracks: usize, artist_count: usize, limits: FetchLimits) -> u32 {
    if artist_count == 0 {
        return 0;
    }

    let share = u32::try_from(max_tracks / artist_count).unwrap_or(u32::MAX);
    limits.max_per_artist.min(share.saturating_add(limits.buffer))
}

/// Reads a JSON array of events (`artistName`, `date`, `venueName`).
pub async fn load_events(path: &Path) -> Result<Vec<SourceEvent>, String> {
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    parse_events(&content)
}

pub fn parse_events(content: &str) -> Result<Vec<SourceEvent>, String> {
    serde_json::from_str(content).map_err(|e| format!("Invalid events file: {}", e))
}

pub fn default_playlist_name(city: &str, week_start: NaiveDate) -> String {
    format!(
        "{} Live Music - Week of {}",
        city,
        week_start.format("%Y-%m-%d")
    )
}

pub fn default_playlist_description(city: &str, state: Option<&str>) -> String {
    let place = match state {
        Some(state) if !state.is_empty() => format!("{}, {}", city, state),
        _ => city.to_string(),
    };
    format!(
        "Weekly playlist featuring artists playing live shows in {}. Discover local music and support your scene!",
        place
    )
}

/// "Venue (date)" label for a show, or an empty string.
pub fn format_show(event: Option<&SourceEvent>) -> String {
    event
        .map(|e| format!("{} ({})", e.venue_name, e.date))
        .unwrap_or_default()
}
