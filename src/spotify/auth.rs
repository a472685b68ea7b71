use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config::Config, types::Token};

/// Builds the Spotify authorization URL the user must visit in a browser.
///
/// Constructs the URL for the OAuth 2.0 authorization code flow. Opening it
/// asks the user to grant the configured scope to the application, after
/// which Spotify redirects the browser to the configured redirect URI with
/// a `code` query parameter attached.
///
/// # Arguments
///
/// * `config` - Application settings holding the client ID, scope, redirect
///   URI, and the authorization endpoint
///
/// # Returns
///
/// Returns the complete authorization URL, or an error string if the query
/// parameters cannot be encoded.
///
/// # Query Parameters
///
/// - `response_type=code` - Requests an authorization code
/// - `client_id` - Identifies the registered application
/// - `scope` - Permissions requested from the user
/// - `redirect_uri` - Where the browser is sent after consent
/// - `show_dialog=true` - Always shows the consent screen, letting the user
///   switch accounts between runs
///
/// # Example
///
/// ```
/// let url = authorization_url(&config)?;
/// println!("Open this URL: {}", url);
/// ```
pub fn authorization_url(config: &Config) -> Result<String, String> {
    let query = serde_urlencoded::to_string([
        ("response_type", "code"),
        ("client_id", config.client_id.as_str()),
        ("scope", config.scope.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("show_dialog", "true"),
    ])
    .map_err(|e| e.to_string())?;

    Ok(format!("{}?{}", config.auth_url, query))
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth 2.0 authorization code flow by posting the code to
/// Spotify's token endpoint. The application authenticates itself with the
/// client ID and client secret sent as an HTTP Basic authorization header.
///
/// # Arguments
///
/// * `config` - Application settings holding the credentials, the redirect
///   URI, and the token endpoint
/// * `code` - Authorization code extracted from the redirect URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Complete token with access token, refresh token, and metadata
/// - `Err(String)` - Error message describing the failure
///
/// # Error Conditions
///
/// Common failures include:
/// - Invalid or expired authorization code
/// - Redirect URI not matching the one used in the authorization request
/// - Network connectivity issues
/// - Spotify API service errors
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly (typically 10
/// minutes). The exchange should happen immediately after receiving the code.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, String> {
    let auth = format!("{}:{}", config.client_id, config.client_secret);
    let basic = format!("Basic {}", STANDARD.encode(auth.as_bytes()));

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header("Authorization", basic)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_response(json)
}

/// Converts a token endpoint response body into a [`Token`].
///
/// A response without a usable `access_token` field is an error; in that
/// case the `error_description` provided by Spotify is surfaced when
/// present. Optional fields such as the refresh token and scope default to
/// empty strings, and a missing expiry defaults to one hour.
pub fn token_from_response(json: Value) -> Result<Token, String> {
    let access_token = json["access_token"].as_str().unwrap_or_default();
    if access_token.is_empty() {
        let reason = json["error_description"]
            .as_str()
            .unwrap_or("no access token in response");
        return Err(reason.to_string());
    }

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
