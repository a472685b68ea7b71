//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! importer, implementing authentication, user lookup, and playlist
//! management functionality. It serves as the integration layer between the
//! CLI and Spotify's services, handling all HTTP communication, the OAuth
//! flow, error handling, and rate limiting.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 Authorization Code)
//!     ├── User Operations (Profile Lookup)
//!     └── Playlist Operations (Create, Add Tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Api Module
//!
//! [`api`] - Boundary between the import flow and the network:
//! - **`SpotifyApi` trait**: The four remote calls the flow performs
//! - **`WebApi`**: Production implementation delegating to [`auth`],
//!   [`user`], and [`playlist`]; tests drive the flow with a mock instead
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization code flow:
//! - **Authorization URL**: Builds the consent URL the user opens in a browser
//! - **Manual Callback**: The user pastes the redirect URL back into the
//!   terminal instead of running a local callback server
//! - **Token Exchange**: Swaps the authorization code for an access token,
//!   authenticating with the client ID and secret via HTTP Basic auth
//!
//! ### User Module
//!
//! [`user`] - Handles user-related API operations:
//! - **Profile Lookup**: Fetches the authenticated user's ID and display name
//! - **Token Validation**: A successful lookup doubles as a token check
//!
//! ### Playlist Module
//!
//! [`playlist`] - Provides playlist creation and modification capabilities:
//! - **Playlist Creation**: Creates a playlist owned by the authenticated user
//! - **Track Management**: Adds tracks in batches of at most
//!   [`playlist::ADD_TRACKS_LIMIT`] URIs
//! - **Order Preservation**: Batches are appended in submission order
//!
//! ## Error Handling
//!
//! ### Rate Limiting
//! - **Automatic Retry**: Handles 429 Too Many Requests with appropriate delays
//! - **Retry-After Headers**: Respects Spotify's recommended retry timing
//! - **Rate Limit Warnings**: Provides user feedback for excessive delays
//!
//! ### Network Resilience
//! - **Transient Failures**: Automatic retry for 502 Bad Gateway responses
//! - **Connection Failures**: Network errors are propagated to the caller
//!
//! ## API Coverage
//!
//! The module covers the following Spotify Web API endpoints:
//!
//! ### User Data
//! - `GET /me` - Profile of the authenticated user
//!
//! ### Playlist Operations
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//!
//! ### Authentication
//! - `POST /api/token` - Token exchange
//!
//! ## Error Types
//!
//! All functions return `Result` types with specific error handling:
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - Authentication and token handling errors
//!
//! ## Security Considerations
//!
//! - **Secrets Stay Local**: The client secret is read from the environment,
//!   sent only to the token endpoint, and never written to logs or disk
//! - **HTTPS Only**: All API communication uses HTTPS
//! - **Limited Scope**: Requests only the permissions playlist creation needs

pub mod api;
pub mod auth;
pub mod playlist;
pub mod user;
