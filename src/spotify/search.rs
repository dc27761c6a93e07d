use async_trait::async_trait;

use crate::{
    Res,
    generator::TrackCatalog,
    spotify::SpotifyClient,
    types::{CatalogTrack, SearchTracksResponse},
};

/// Spotify caps `limit` on the search endpoint at 50.
const MAX_SEARCH_LIMIT: u32 = 50;

/// Track search through `GET /search?type=track`.
///
/// # Arguments
///
/// * `query` - Search expression, e.g. `artist:"Big Thief" NOT genre:pop`
/// * `limit` - Number of tracks to return, clamped to 1..=50
///
/// # Errors
///
/// Network failures, non-success statuses and payloads that do not match
/// the expected `tracks.items[]` shape are all returned as errors.
#[async_trait]
impl TrackCatalog for SpotifyClient {
    async fn search_tracks(&self, query: &str, limit: u32) -> Res<Vec<CatalogTrack>> {
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT).to_string();

        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<SearchTracksResponse>().await?;

        Ok(json
            .tracks
            .items
            .into_iter()
            .map(|t| CatalogTrack {
                uri: t.uri,
                name: t.name,
                popularity: t.popularity,
            })
            .collect())
    }
}
