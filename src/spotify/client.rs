use reqwest::Client;

use crate::{Res, config, types::CurrentUserResponse};

/// Authenticated handle on the Spotify Web API.
///
/// Every request carries the configured timeout; a timeout surfaces as an
/// ordinary request error. Nothing is retried.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) token: String,
}

impl SpotifyClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Res<Self> {
        let http = Client::builder().timeout(config::request_timeout()).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Client against the configured API URL.
    pub fn from_env(token: impl Into<String>) -> Res<Self> {
        Self::new(config::spotify_apiurl(), token)
    }

    /// Id of the user the token belongs to.
    pub async fn current_user_id(&self) -> Res<String> {
        let response = self
            .http
            .get(format!("{}/me", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        let user = response.json::<CurrentUserResponse>().await?;
        Ok(user.id)
    }
}
