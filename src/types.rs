use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Body of the token endpoint for both code exchange and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// A live show as delivered by the event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEvent {
    pub artist_name: String,
    pub date: String,
    pub venue_name: String,
}

/// A single catalog search hit, already stripped of wire details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTrack {
    pub uri: String,
    pub name: String,
    pub popularity: u8,
}

/// A track that may end up in the playlist, tagged with the artist query
/// that found it and the first show of that artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCandidate {
    pub uri: String,
    pub name: String,
    pub artist_query: String,
    pub popularity: u8,
    pub source_event: Option<SourceEvent>,
}

/// Constants of the per-artist fetch limit `min(max_per_artist, max_tracks / artists + buffer)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    pub max_per_artist: u32,
    pub buffer: u32,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_per_artist: 10,
            buffer: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub playlist_name: String,
    pub description: String,
    pub max_tracks: usize,
    pub shuffle_artists: bool,
    pub include_popular: bool,
    pub discovery_mode: bool,
    pub is_public: bool,
    pub fetch_limits: FetchLimits,
}

impl GenerationOptions {
    pub fn new(playlist_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            playlist_name: playlist_name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            playlist_name: String::from("Live Music"),
            description: String::new(),
            max_tracks: 50,
            shuffle_artists: true,
            include_popular: true,
            discovery_mode: false,
            is_public: true,
            fetch_limits: FetchLimits::default(),
        }
    }
}

/// Identity of a freshly created remote playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistShell {
    pub id: String,
    pub external_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlaylist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub external_url: String,
    pub track_count: usize,
    pub artists: Vec<String>,
    pub events: Vec<SourceEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistHistoryEntry {
    pub generated_at: String,
    pub complete: bool,
    pub playlist: GeneratedPlaylist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<SearchTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTrack {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub artist: String,
    pub track: String,
    pub popularity: u8,
    pub show: String,
}

#[derive(Tabled)]
pub struct HistoryTableRow {
    pub generated: String,
    pub name: String,
    pub tracks: String,
    pub artists: String,
    pub url: String,
}
