use async_trait::async_trait;

use crate::{
    Res,
    types::{CatalogTrack, PlaylistShell},
};

/// Catalog search capability.
///
/// Returns tracks in the provider's relevance order, at most `limit` of them.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn search_tracks(&self, query: &str, limit: u32) -> Res<Vec<CatalogTrack>>;
}

/// Playlist write capability.
#[async_trait]
pub trait PlaylistWriter: Send + Sync {
    async fn create_playlist(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<PlaylistShell>;

    /// Appends `uris` to the end of the playlist. Callers keep each call
    /// within [`crate::generator::TRACK_BATCH_SIZE`] items.
    async fn append_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()>;
}
