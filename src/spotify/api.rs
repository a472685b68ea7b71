use crate::{
    config::Config,
    spotify::{auth, playlist, user},
    types::{
        AddTrackToPlaylistResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUserResponse, Token,
    },
};

/// The remote calls the import flow performs, behind one trait so the
/// flow can be driven without touching the network.
///
/// [`WebApi`] is the production implementation; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SpotifyApi: Send + Sync {
    async fn exchange_code(&self, code: &str) -> Result<Token, String>;

    async fn current_user(&self, token: &str) -> Result<CurrentUserResponse, String>;

    async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, String>;

    async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse, String>;
}

/// Production implementation backed by the Spotify Web API.
pub struct WebApi {
    config: Config,
}

impl WebApi {
    pub fn new(config: Config) -> Self {
        WebApi { config }
    }
}

#[async_trait::async_trait]
impl SpotifyApi for WebApi {
    async fn exchange_code(&self, code: &str) -> Result<Token, String> {
        auth::exchange_code(&self.config, code).await
    }

    async fn current_user(&self, token: &str) -> Result<CurrentUserResponse, String> {
        user::current_user(&self.config, token)
            .await
            .map_err(|e| e.to_string())
    }

    async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, String> {
        playlist::create(&self.config, token, user_id, request)
            .await
            .map_err(|e| e.to_string())
    }

    async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse, String> {
        playlist::add_tracks(&self.config, token, playlist_id, uris)
            .await
            .map_err(|e| e.to_string())
    }
}
