//! # CLI Module
//!
//! This module provides the command-line interface layer for the importer, a
//! Spotify API client that turns a text file of track links into a playlist.
//! It implements the user-facing command flow and coordinates between the
//! Spotify integration layer, the interactive prompts, and the link parsing
//! utilities.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between the user and the
//! application's functionality. A single run walks through:
//!
//! - **Input Collection**: Interactive prompts for the playlist name, an
//!   optional description, and the track list file
//! - **Authentication**: OAuth 2.0 authorization code flow where the user
//!   grants access in a browser and pastes the redirect URL back
//! - **Playlist Creation**: Creating the playlist on the user's account
//! - **Track Import**: Adding the collected tracks in batches
//!
//! ## Commands
//!
//! - [`import`] - Runs the full import flow from prompts to finished playlist
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! The command delegates to the Spotify modules while handling user
//! interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! The flow distinguishes recoverable from fatal conditions:
//!
//! - **Recoverable**: Unusable prompt input is asked again, and a browser
//!   that will not open falls back to a printed URL
//! - **Fatal**: A failed token exchange, an unreadable track file, an empty
//!   track list, and a failed playlist creation all terminate the run with
//!   an error message
//! - **No Rollback**: If adding tracks fails partway, the playlist is left
//!   as-is and the error names it, so the user can inspect or delete it
//!
//! ## Progress and User Experience
//!
//! Long-running operations provide user feedback:
//!
//! - **Progress Indicators**: A spinner with batch counts during track adds
//! - **Status Messages**: Informative messages about the current step
//! - **Success Confirmation**: Clear indication when the playlist is ready
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::prompt`] - Interactive terminal prompts
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::utils`] - Track link parsing and file reading

mod import;

pub use import::import;
