use std::sync::Arc;

use rand::Rng;

use crate::{
    generator::{GenerateError, fetcher, policy, traits::TrackCatalog},
    types::{GenerationOptions, SourceEvent, TrackCandidate},
    utils, warning,
};

/// Gathers the candidate pool for every distinct artist in `events`.
///
/// Searches run concurrently, one task per artist. Results are collected
/// in first-seen artist order whatever order the searches finish in, so the
/// pool is deterministic for a given catalog. Each artist's candidates are
/// ordered by the selection policy and tagged with that artist's first show.
pub async fn assemble_pool<R: Rng + ?Sized>(
    catalog: Arc<dyn TrackCatalog>,
    events: &[SourceEvent],
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<Vec<TrackCandidate>, GenerateError> {
    let artists = utils::distinct_artists(events);
    let limit = utils::per_artist_limit(options.max_tracks, artists.len(), options.fetch_limits);

    let mut handles = Vec::with_capacity(artists.len());
    for artist in &artists {
        let catalog = Arc::clone(&catalog);
        let artist = artist.clone();
        let options = options.clone();
        let handle = tokio::spawn(async move {
            fetcher::fetch_candidates(catalog.as_ref(), &artist, limit, &options).await
        });
        handles.push(handle);
    }

    let mut pool: Vec<TrackCandidate> = Vec::new();
    for (artist, handle) in artists.iter().zip(handles) {
        let candidates = match handle.await {
            Ok(candidates) => candidates,
            Err(e) => {
                warning!("Search task for artist {} failed: {}", artist, e);
                Vec::new()
            }
        };

        let source_event = events.iter().find(|e| &e.artist_name == artist).cloned();
        let candidates = policy::apply_policy(candidates, options, rng);

        pool.extend(candidates.into_iter().map(|mut c| {
            c.source_event = source_event.clone();
            c
        }));
    }

    if pool.is_empty() {
        return Err(GenerateError::NoTracksFound { artists });
    }

    Ok(pool)
}
