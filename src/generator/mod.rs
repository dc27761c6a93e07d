//! # Playlist Generator
//!
//! Turns a list of live events into an ordered track list and writes it to a
//! new playlist. The pipeline runs in five steps:
//!
//! ```text
//! SourceEvent[]
//!     ↓ distinct artists (first-seen order)
//! Fetcher          one catalog search per artist, failures yield nothing
//!     ↓
//! Selection Policy discovery / balanced / relevance ordering per artist
//!     ↓
//! Pool             candidates tagged with artist and first show
//!     ↓
//! Distributor      round-robin across artists, cut to max_tracks
//!     ↓
//! Materializer     create playlist, append in batches of 100
//! ```
//!
//! Everything up to the distributor is local computation plus catalog
//! reads; the first remote write happens only once the final list is known
//! and non-empty.
//!
//! Both remote capabilities are traits ([`TrackCatalog`], [`PlaylistWriter`])
//! so the engine runs against the Spotify client in production and against
//! in-memory fakes in tests. The random source behind the balanced policy is
//! injectable and seedable.

pub mod distribute;
mod error;
pub mod fetcher;
pub mod materialize;
pub mod policy;
pub mod pool;
mod traits;

use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};

pub use distribute::{OrderedGroups, distribute};
pub use error::GenerateError;
pub use materialize::{ShellInputs, TRACK_BATCH_SIZE, materialize};
pub use policy::SelectionPolicy;
pub use traits::{PlaylistWriter, TrackCatalog};

use crate::{
    types::{GeneratedPlaylist, GenerationOptions, SourceEvent, TrackCandidate},
    utils,
};

pub struct PlaylistGenerator<R = StdRng> {
    catalog: Arc<dyn TrackCatalog>,
    writer: Arc<dyn PlaylistWriter>,
    rng: R,
}

impl PlaylistGenerator<StdRng> {
    pub fn new(catalog: Arc<dyn TrackCatalog>, writer: Arc<dyn PlaylistWriter>) -> Self {
        Self::with_rng(catalog, writer, StdRng::from_os_rng())
    }

    /// Same seed, same catalog results, same playlist.
    pub fn with_seed(
        catalog: Arc<dyn TrackCatalog>,
        writer: Arc<dyn PlaylistWriter>,
        seed: u64,
    ) -> Self {
        Self::with_rng(catalog, writer, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PlaylistGenerator<R> {
    pub fn with_rng(catalog: Arc<dyn TrackCatalog>, writer: Arc<dyn PlaylistWriter>, rng: R) -> Self {
        Self {
            catalog,
            writer,
            rng,
        }
    }

    /// Computes the final ordered track list without writing anything.
    pub async fn plan(
        &mut self,
        events: &[SourceEvent],
        options: &GenerationOptions,
    ) -> Result<Vec<TrackCandidate>, GenerateError> {
        let pool =
            pool::assemble_pool(Arc::clone(&self.catalog), events, options, &mut self.rng).await?;

        let final_tracks = distribute(pool, options.max_tracks, options.shuffle_artists);
        if final_tracks.is_empty() {
            return Err(GenerateError::NoTracksFound {
                artists: utils::distinct_artists(events),
            });
        }

        Ok(final_tracks)
    }

    /// Plans the track list for `events` and writes it to a new playlist
    /// owned by `owner_id`.
    pub async fn generate(
        &mut self,
        owner_id: &str,
        events: &[SourceEvent],
        options: &GenerationOptions,
    ) -> Result<GeneratedPlaylist, GenerateError> {
        let final_tracks = self.plan(events, options).await?;

        let shell = ShellInputs {
            owner_id,
            name: &options.playlist_name,
            description: &options.description,
            public: options.is_public,
        };

        materialize(
            self.writer.as_ref(),
            shell,
            &final_tracks,
            utils::distinct_artists(events),
            events.to_vec(),
        )
        .await
    }
}
