use crate::{
    generator::{GenerateError, traits::PlaylistWriter},
    types::{GeneratedPlaylist, SourceEvent, TrackCandidate},
};

/// Maximum number of URIs accepted by one append call.
pub const TRACK_BATCH_SIZE: usize = 100;

/// What the remote playlist shell is created with.
#[derive(Debug, Clone, Copy)]
pub struct ShellInputs<'a> {
    pub owner_id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub public: bool,
}

/// Creates the remote playlist and appends `final_tracks` in order.
///
/// Batches go out one after another since each append lands at the end of
/// the remote list. A failed batch stops the run; the playlist is kept with
/// whatever was written so far.
pub async fn materialize(
    writer: &dyn PlaylistWriter,
    shell: ShellInputs<'_>,
    final_tracks: &[TrackCandidate],
    artists: Vec<String>,
    events: Vec<SourceEvent>,
) -> Result<GeneratedPlaylist, GenerateError> {
    if final_tracks.is_empty() {
        return Err(GenerateError::NoTracksFound { artists });
    }

    let created = writer
        .create_playlist(shell.owner_id, shell.name, shell.description, shell.public)
        .await
        .map_err(GenerateError::PlaylistShellCreation)?;

    let mut playlist = GeneratedPlaylist {
        id: created.id,
        name: shell.name.to_string(),
        description: shell.description.to_string(),
        external_url: created.external_url,
        track_count: 0,
        artists,
        events,
    };

    let uris: Vec<String> = final_tracks.iter().map(|t| t.uri.clone()).collect();
    let intended = uris.len();

    for batch in uris.chunks(TRACK_BATCH_SIZE) {
        if let Err(source) = writer.append_tracks(&playlist.id, batch).await {
            let written = playlist.track_count;
            return Err(GenerateError::TrackBatchWrite {
                playlist,
                written,
                intended,
                source,
            });
        }
        playlist.track_count += batch.len();
    }

    Ok(playlist)
}
