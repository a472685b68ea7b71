use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config::Config, types::CurrentUserResponse};

/// Retrieves the profile of the user the access token belongs to.
///
/// The user ID from the profile is required for playlist creation, which is
/// scoped to a user account. The call also serves as a cheap check that the
/// freshly obtained token actually works.
///
/// # Arguments
///
/// * `config` - Application settings holding the API base URL
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CurrentUserResponse)` - The user's ID and optional display name
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
/// let me = current_user(&config, &token.access_token).await?;
/// println!("Logged in as {}", me.id);
/// ```
pub async fn current_user(
    config: &Config,
    token: &str,
) -> Result<CurrentUserResponse, reqwest::Error> {
    loop {
        let api_url = format!("{uri}/me", uri = &config.api_url);

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

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

        return Ok(response.json::<CurrentUserResponse>().await?);
    }
}
