use crate::{
    generator::traits::TrackCatalog,
    types::{GenerationOptions, TrackCandidate},
    warning,
};

/// Builds the catalog query for one artist.
///
/// The artist name is matched exactly (quoted). Outside discovery mode,
/// turning off popular tracks excludes the broad `pop` genre.
pub fn build_query(artist_name: &str, options: &GenerationOptions) -> String {
    let mut query = format!("artist:\"{}\"", artist_name.replace('"', ""));
    if !options.discovery_mode && !options.include_popular {
        query.push_str(" NOT genre:pop");
    }
    query
}

/// Searches the catalog for up to `limit` tracks by `artist_name`.
///
/// A failed search is reported and yields no candidates; it never aborts
/// the run. The returned candidates carry no source event yet, the pool
/// assembler attaches it.
pub async fn fetch_candidates(
    catalog: &dyn TrackCatalog,
    artist_name: &str,
    limit: u32,
    options: &GenerationOptions,
) -> Vec<TrackCandidate> {
    let query = build_query(artist_name, options);

    match catalog.search_tracks(&query, limit).await {
        Ok(tracks) => tracks
            .into_iter()
            .take(limit as usize)
            .map(|track| TrackCandidate {
                uri: track.uri,
                name: track.name,
                artist_query: artist_name.to_string(),
                popularity: track.popularity,
                source_event: None,
            })
            .collect(),
        Err(e) => {
            warning!("Failed to search tracks for artist {}: {}", artist_name, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_quotes_artist_name() {
        let options = GenerationOptions::default();
        assert_eq!(build_query("Big Thief", &options), "artist:\"Big Thief\"");
    }

    #[test]
    fn query_excludes_pop_without_popular_tracks() {
        let options = GenerationOptions {
            include_popular: false,
            ..GenerationOptions::default()
        };
        assert_eq!(
            build_query("Big Thief", &options),
            "artist:\"Big Thief\" NOT genre:pop"
        );
    }

    #[test]
    fn discovery_mode_wins_over_popular_exclusion() {
        let options = GenerationOptions {
            include_popular: false,
            discovery_mode: true,
            ..GenerationOptions::default()
        };
        assert_eq!(build_query("Big Thief", &options), "artist:\"Big Thief\"");
    }

    #[test]
    fn embedded_quotes_do_not_break_query() {
        let options = GenerationOptions::default();
        assert_eq!(
            build_query("The \"Real\" Band", &options),
            "artist:\"The Real Band\""
        );
    }
}
