use chrono::DateTime;
use tabled::Table;

use crate::{
    info,
    management::PlaylistHistoryManager,
    types::{HistoryTableRow, PlaylistHistoryEntry},
    warning,
};

pub async fn history(limit: Option<usize>) {
    let history = match PlaylistHistoryManager::load().await {
        Ok(history) => history,
        Err(e) => {
            warning!("Failed to load playlist history. Err: {}", e);
            return;
        }
    };

    if history.entries().is_empty() {
        info!("No playlists generated yet. Run showlist generate --events <file>.");
        return;
    }

    let rows: Vec<HistoryTableRow> = history
        .entries()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(history_row)
        .collect();

    println!("{}", Table::new(rows));
}

fn history_row(entry: &PlaylistHistoryEntry) -> HistoryTableRow {
    let playlist = &entry.playlist;

    let generated = DateTime::parse_from_rfc3339(&entry.generated_at)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| entry.generated_at.clone());

    let tracks = if entry.complete {
        playlist.track_count.to_string()
    } else {
        format!("{} (incomplete)", playlist.track_count)
    };

    let mut artists = playlist
        .artists
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if playlist.artists.len() > 3 {
        artists.push_str(&format!(" +{}", playlist.artists.len() - 3));
    }

    HistoryTableRow {
        generated,
        name: playlist.name.clone(),
        tracks,
        artists,
        url: playlist.external_url.clone(),
    }
}
