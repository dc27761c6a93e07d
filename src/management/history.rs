use std::{io::Error, path::PathBuf};

use chrono::Utc;

use crate::{
    config,
    types::{GeneratedPlaylist, PlaylistHistoryEntry},
};

/// Number of entries kept in the history file.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug)]
pub enum HistoryError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::IoError(e) => write!(f, "history file error: {}", e),
            HistoryError::SerdeError(e) => write!(f, "history file is corrupt: {}", e),
        }
    }
}

impl From<Error> for HistoryError {
    fn from(err: Error) -> Self {
        HistoryError::IoError(err)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::SerdeError(err)
    }
}

/// Generated playlists, most recent first.
pub struct PlaylistHistoryManager {
    path: PathBuf,
    entries: Vec<PlaylistHistoryEntry>,
}

impl PlaylistHistoryManager {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// History at its default location, empty when no file exists yet.
    pub async fn load() -> Result<Self, HistoryError> {
        Self::load_from(Self::default_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, HistoryError> {
        let entries = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub async fn persist(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Records a playlist; `complete` is false when not every track made it.
    pub fn record(&mut self, playlist: GeneratedPlaylist, complete: bool) -> &mut Self {
        self.entries.insert(
            0,
            PlaylistHistoryEntry {
                generated_at: Utc::now().to_rfc3339(),
                complete,
                playlist,
            },
        );
        self.entries.truncate(HISTORY_LIMIT);
        self
    }

    pub fn entries(&self) -> &[PlaylistHistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&PlaylistHistoryEntry> {
        self.entries.first()
    }

    fn default_path() -> PathBuf {
        config::data_dir().join("cache/playlist-history.json")
    }
}
