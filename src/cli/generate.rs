use std::{path::PathBuf, sync::Arc, time::Duration};

use chrono::{NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error,
    generator::{GenerateError, PlaylistGenerator},
    info,
    management::{PlaylistHistoryManager, TokenManager},
    spotify::SpotifyClient,
    success,
    types::{GeneratedPlaylist, GenerationOptions, TrackCandidate, TrackTableRow},
    utils, warning,
};

/// Everything the `generate` command was asked for.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub events_file: PathBuf,
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub owner: Option<String>,
    pub max_tracks: usize,
    pub no_shuffle: bool,
    pub exclude_popular: bool,
    pub discovery: bool,
    pub private: bool,
    pub seed: Option<u64>,
    pub dry_run: bool,
}

pub async fn generate(request: GenerateRequest) {
    let events = match utils::load_events(&request.events_file).await {
        Ok(events) => events,
        Err(e) => error!("{}", e),
    };

    if events.is_empty() {
        error!(
            "No events in {}. Nothing to build a playlist from.",
            request.events_file.display()
        );
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run showlist auth\n Error: {}",
                e
            );
        }
    };

    let client = match SpotifyClient::from_env(token_mgr.get_valid_token().await) {
        Ok(client) => Arc::new(client),
        Err(e) => error!("Cannot set up Spotify client: {}", e),
    };

    let options = generation_options(&request, Utc::now().date_naive());
    let mut generator = match request.seed {
        Some(seed) => PlaylistGenerator::with_seed(client.clone(), client.clone(), seed),
        None => PlaylistGenerator::new(client.clone(), client.clone()),
    };

    info!(
        "Searching tracks for {} artists from {} events",
        utils::distinct_artists(&events).len(),
        events.len()
    );

    if request.dry_run {
        let pb = spinner("Planning playlist...");
        let planned = generator.plan(&events, &options).await;
        pb.finish_and_clear();

        match planned {
            Ok(tracks) => {
                println!("{}", Table::new(track_rows(&tracks)));
                success!(
                    "Planned {} tracks for '{}'. Nothing was written.",
                    tracks.len(),
                    options.playlist_name
                );
            }
            Err(e) => error!("{}", e),
        }
        return;
    }

    let owner_id = match request.owner.clone().or_else(config::spotify_user) {
        Some(owner) => owner,
        None => match client.current_user_id().await {
            Ok(id) => id,
            Err(e) => error!("Cannot determine playlist owner: {}", e),
        },
    };

    let pb = spinner("Generating playlist...");
    let result = generator.generate(&owner_id, &events, &options).await;
    pb.finish_and_clear();

    match result {
        Ok(playlist) => {
            record_history(&playlist, true).await;
            success!(
                "Playlist '{}' created with {} tracks: {}",
                playlist.name,
                playlist.track_count,
                playlist.external_url
            );
        }
        Err(e) => {
            if let GenerateError::TrackBatchWrite { playlist, .. } = &e {
                record_history(playlist, false).await;
                warning!("Incomplete playlist kept at {}", playlist.external_url);
            }
            error!("{}", e);
        }
    }
}

/// Options for a run. A missing name or description falls back to the
/// weekly template when a city is known.
pub fn generation_options(request: &GenerateRequest, today: NaiveDate) -> GenerationOptions {
    let city = request.city.as_deref().filter(|c| !c.is_empty());

    let playlist_name = request.name.clone().unwrap_or_else(|| match city {
        Some(city) => utils::default_playlist_name(city, today),
        None => format!("Live Music - Week of {}", today.format("%Y-%m-%d")),
    });

    let description = request.description.clone().unwrap_or_else(|| match city {
        Some(city) => utils::default_playlist_description(city, request.state.as_deref()),
        None => String::from("Artists playing live shows near you."),
    });

    GenerationOptions {
        playlist_name,
        description,
        max_tracks: request.max_tracks,
        shuffle_artists: !request.no_shuffle,
        include_popular: !request.exclude_popular,
        discovery_mode: request.discovery,
        is_public: !request.private,
        fetch_limits: config::fetch_limits(),
    }
}

fn track_rows(tracks: &[TrackCandidate]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            artist: t.artist_query.clone(),
            track: t.name.clone(),
            popularity: t.popularity,
            show: utils::format_show(t.source_event.as_ref()),
        })
        .collect()
}

async fn record_history(playlist: &GeneratedPlaylist, complete: bool) {
    let mut history = match PlaylistHistoryManager::load().await {
        Ok(history) => history,
        Err(e) => {
            warning!("Playlist history unavailable: {}", e);
            return;
        }
    };

    if let Err(e) = history.record(playlist.clone(), complete).persist().await {
        warning!("Failed to save playlist history: {}", e);
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            events_file: PathBuf::from("events.json"),
            name: None,
            description: None,
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            owner: None,
            max_tracks: 50,
            no_shuffle: false,
            exclude_popular: false,
            discovery: false,
            private: false,
            seed: None,
            dry_run: false,
        }
    }

    #[test]
    fn defaults_follow_weekly_template() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let options = generation_options(&request(), today);

        assert_eq!(options.playlist_name, "Austin Live Music - Week of 2024-03-04");
        assert!(options.description.contains("Austin, TX"));
        assert!(options.shuffle_artists);
        assert!(options.include_popular);
        assert!(!options.discovery_mode);
        assert!(options.is_public);
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let mut req = request();
        req.name = Some("Weekend".to_string());
        req.no_shuffle = true;
        req.exclude_popular = true;
        req.private = true;
        req.max_tracks = 20;

        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let options = generation_options(&req, today);

        assert_eq!(options.playlist_name, "Weekend");
        assert_eq!(options.max_tracks, 20);
        assert!(!options.shuffle_artists);
        assert!(!options.include_popular);
        assert!(!options.is_public);
    }
}
