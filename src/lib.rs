//! Spotify Playlist Import CLI Library
//!
//! This library backs `spimcli`, a small command-line tool that reads Spotify
//! track links from a text file, walks the user through the OAuth 2.0
//! authorization-code flow, and assembles the linked tracks into a freshly
//! created playlist on the user's account.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `prompt` - Interactive terminal prompts for operator input
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Link parsing and file handling helpers
//!
//! # Example
//!
//! ```
//! use spimcli::{cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     let cfg = config::Config::from_env().expect("missing configuration");
//!     cli::import(cfg).await;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod prompt;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for code paths that mix error
/// sources (file IO, JSON decoding) behind one boxed dynamic error trait
/// object, keeping Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use spimcli::Res;
///
/// async fn read_input() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for progress milestones throughout the flow (authorization URL,
/// "Creating playlist...", "Adding N tracks...").
///
/// # Example
///
/// ```
/// info!("Creating playlist {}...", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm completed steps, including the terminal success line with
/// the playlist name and track count.
///
/// # Example
///
/// ```
/// success!("Playlist '{}' created with {} tracks.", name, count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This is the fatal path: the message is the last thing the operator sees
/// and the process terminates with exit code 1. Reserved for unrecoverable
/// conditions such as a failed token exchange or a remote call that cannot
/// be completed.
///
/// # Example
///
/// ```
/// error!("Failed to get an access token: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, like invalid prompt input that is about to
/// be asked again or a browser that will not open.
///
/// # Example
///
/// ```
/// warning!("A playlist name is required.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
