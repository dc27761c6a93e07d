use std::{error::Error, fmt};

use crate::types::GeneratedPlaylist;

type BoxError = Box<dyn Error + Send + Sync>;

/// Failures that end a generation run.
///
/// Per-artist search failures never show up here; they are reported and
/// the artist simply contributes no tracks.
#[derive(Debug)]
pub enum GenerateError {
    /// Nothing to put in the playlist. Raised before any remote write.
    NoTracksFound { artists: Vec<String> },
    /// The remote playlist could not be created. Nothing was written.
    PlaylistShellCreation(BoxError),
    /// A track batch was rejected. The playlist exists and holds the first
    /// `written` of `intended` tracks; `playlist.track_count == written`.
    TrackBatchWrite {
        playlist: GeneratedPlaylist,
        written: usize,
        intended: usize,
        source: BoxError,
    },
}

impl GenerateError {
    /// Whether a remote playlist was left behind despite the failure.
    pub fn is_partial(&self) -> bool {
        matches!(self, GenerateError::TrackBatchWrite { .. })
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NoTracksFound { artists } => write!(
                f,
                "No tracks found for the provided artists ({})",
                artists.join(", ")
            ),
            GenerateError::PlaylistShellCreation(e) => {
                write!(f, "Failed to create playlist: {}", e)
            }
            GenerateError::TrackBatchWrite {
                playlist,
                written,
                intended,
                source,
            } => write!(
                f,
                "Playlist '{}' was created but only {} of {} tracks were added: {}",
                playlist.name, written, intended, source
            ),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerateError::NoTracksFound { .. } => None,
            GenerateError::PlaylistShellCreation(e) => Some(e.as_ref()),
            GenerateError::TrackBatchWrite { source, .. } => Some(source.as_ref()),
        }
    }
}
