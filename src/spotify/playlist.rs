use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config::Config,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
    warning,
};

/// Maximum number of track URIs Spotify accepts per add request.
pub const ADD_TRACKS_LIMIT: usize = 100;

/// Creates a new playlist for the given user.
///
/// Sends the playlist metadata to the Spotify Web API. The playlist starts
/// out empty; tracks are added afterwards with [`add_tracks`].
///
/// # Arguments
///
/// * `config` - Application settings holding the API base URL
/// * `token` - Valid access token for Spotify API authentication
/// * `user_id` - ID of the user the playlist is created for
/// * `request` - Playlist name, description, and visibility flags
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - The created playlist, including its ID
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Retry Logic
///
/// The function implements automatic retry logic for 502 Bad Gateway errors
/// with a 10-second delay between attempts. Other errors are propagated
/// immediately.
///
/// # Example
///
/// ```
/// let request = CreatePlaylistRequest {
///     name: "Road Trip".to_string(),
///     description: "Collected from friends".to_string(),
///     public: true,
///     collaborative: false,
/// };
/// let playlist = create(&config, &token, &user_id, &request).await?;
/// println!("Created playlist {}", playlist.id);
/// ```
pub async fn create(
    config: &Config,
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/users/{user_id}/playlists",
            uri = &config.api_url,
            user_id = user_id
        );

        let client = Client::new();
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return Ok(response.json::<CreatePlaylistResponse>().await?);
    }
}

/// Adds a batch of track URIs to an existing playlist.
///
/// The caller is responsible for keeping each batch within
/// [`ADD_TRACKS_LIMIT`] URIs; larger requests are rejected by the API.
/// Batches are appended in request order, so tracks end up in the playlist
/// in the same order they were submitted.
///
/// # Arguments
///
/// * `config` - Application settings holding the API base URL
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - ID of the playlist receiving the tracks
/// * `uris` - Track URIs in `spotify:track:<id>` form
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AddTrackToPlaylistResponse)` - Snapshot ID of the updated playlist
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Retry Logic
///
/// Rate limited responses (429) are retried after the delay announced in the
/// Retry-After header, as long as that delay stays within 120 seconds.
/// 502 Bad Gateway responses are retried after 10 seconds. Other errors are
/// propagated immediately.
pub async fn add_tracks(
    config: &Config,
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<AddTrackToPlaylistResponse, reqwest::Error> {
    let body = AddTrackToPlaylistRequest {
        uris: uris.to_vec(),
    };

    loop {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = &config.api_url,
            playlist_id = playlist_id
        );

        let client = Client::new();
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(resp) => {
                // check for retry-after header
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    if let Some(retry_after) = resp.headers().get("retry-after") {
                        let retry_after = retry_after
                            .to_str()
                            .unwrap_or("0")
                            .parse::<u64>()
                            .unwrap_or(0);
                        if retry_after <= 120 {
                            sleep(Duration::from_secs(retry_after)).await;
                            continue; // retry the same batch
                        }
                        warning!(
                            "Retry after has reached a abnormal high of {} seconds. Try your best tommorrow again.",
                            retry_after
                        );
                    }
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return Ok(response.json::<AddTrackToPlaylistResponse>().await?);
    }
}
