//! Configuration management for the Spotify playlist importer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the Spotify API credentials and the OAuth endpoints
//! used during authentication.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spimcli/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values. A missing `.env`
/// file is not an error; in that case the process environment is used as-is.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spimcli/.env`
/// - macOS: `~/Library/Application Support/spimcli/.env`
/// - Windows: `%LOCALAPPDATA%/spimcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded or absent,
/// or an error string if directory creation or file parsing fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
///
/// # Example
///
/// ```
/// use spimcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spimcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.exists() {
        dotenv::from_path(&path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
    }
    Ok(())
}

/// Resolved application settings for a single run.
///
/// All values are read once at startup via [`Config::from_env`] and passed
/// by reference afterwards; nothing mutates them later. The struct carries
/// the client secret and therefore implements neither `Debug` nor `Display`,
/// which keeps the secret out of logs and error output.
#[derive(Clone)]
pub struct Config {
    /// Client ID obtained when registering the application with Spotify.
    pub client_id: String,
    /// Client secret belonging to the registered application. Confidential.
    pub client_secret: String,
    /// Callback URL registered in the Spotify application settings. Must match
    /// the value configured there exactly, or the authorization step fails.
    pub redirect_uri: String,
    /// OAuth scope requested during authorization.
    pub scope: String,
    /// Base URL of the OAuth authorization endpoint.
    pub auth_url: String,
    /// URL for exchanging authorization codes for access tokens.
    pub token_url: String,
    /// Base URL of the Spotify Web API.
    pub api_url: String,
}

impl Config {
    /// Builds a [`Config`] from environment variables.
    ///
    /// The credentials and the redirect URI are mandatory; the remaining
    /// values fall back to Spotify's public endpoints and a scope that
    /// permits playlist modification.
    ///
    /// # Required Variables
    ///
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`
    /// - `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// - `SPOTIFY_API_REDIRECT_URI`
    ///
    /// # Optional Variables
    ///
    /// - `SPOTIFY_API_AUTH_SCOPE` (default: `playlist-modify-public playlist-modify-private`)
    /// - `SPOTIFY_API_AUTH_URL` (default: `https://accounts.spotify.com/authorize`)
    /// - `SPOTIFY_API_TOKEN_URL` (default: `https://accounts.spotify.com/api/token`)
    /// - `SPOTIFY_API_URL` (default: `https://api.spotify.com/v1`)
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first required variable that is
    /// not set.
    ///
    /// # Example
    ///
    /// ```
    /// use spimcli::config::Config;
    ///
    /// let config = Config::from_env().expect("missing Spotify credentials");
    /// ```
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: require("SPOTIFY_API_REDIRECT_URI")?,
            scope: env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            auth_url: env::var("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
