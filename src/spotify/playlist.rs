use async_trait::async_trait;

use crate::{
    Res,
    generator::PlaylistWriter,
    spotify::SpotifyClient,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, PlaylistShell,
    },
};

#[async_trait]
impl PlaylistWriter for SpotifyClient {
    /// Creates an empty playlist through `POST /users/{owner_id}/playlists`.
    async fn create_playlist(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<PlaylistShell> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
        };

        let response = self
            .http
            .post(format!("{}/users/{}/playlists", self.base_url, owner_id))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<CreatePlaylistResponse>().await?;

        Ok(PlaylistShell {
            id: json.id,
            external_url: json.external_urls.spotify,
        })
    }

    /// Appends one batch through `POST /playlists/{id}/tracks`.
    async fn append_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(format!("{}/playlists/{}/tracks", self.base_url, playlist_id))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response.json::<AddTrackToPlaylistResponse>().await?;
        Ok(())
    }
}
