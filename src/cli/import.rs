use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Config,
    error, info,
    prompt::{self, PromptError},
    spotify::{
        self,
        api::{SpotifyApi, WebApi},
    },
    success,
    types::CreatePlaylistRequest,
    utils, warning,
};

#[derive(Debug)]
enum ImportError {
    ExchangeError(String),
    UserError(String),
    FileError(Box<dyn std::error::Error + Send + Sync>),
    NoTracks,
    CreateError(String),
    AddError { added: usize, reason: String },
}

pub async fn import(config: Config) {
    let auth_url = match spotify::auth::authorization_url(&config) {
        Ok(url) => url,
        Err(e) => {
            error!("Failed to build the authorization URL: {}", e);
        }
    };

    info!("You will be asked to grant the application access to your Spotify account.");
    info!("Please go to this URL to authorize:");
    println!("{}", auth_url);

    if webbrowser::open(&auth_url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }

    let name = prompt_or_exit(prompt::playlist_name());
    let description = prompt_or_exit(prompt::playlist_description());
    let code = prompt_or_exit(prompt::authorization_code());
    let file = prompt_or_exit(prompt::track_file());

    let api = WebApi::new(config);
    if let Err(e) = run_import(&api, &name, &description, &code, &file).await {
        match e {
            ImportError::ExchangeError(e) => {
                error!("Failed to get an access token: {}", e);
            }
            ImportError::UserError(e) => {
                error!("Failed to fetch the current user: {}", e);
            }
            ImportError::FileError(e) => {
                error!("Failed to read {}: {}", file.display(), e);
            }
            ImportError::NoTracks => {
                error!("No valid track links found in {}.", file.display());
            }
            ImportError::CreateError(e) => {
                error!("Failed to create playlist: {}", e);
            }
            ImportError::AddError { added, reason } => {
                error!(
                    "Failed to add tracks to playlist {name}: {reason}\nThe playlist was created and keeps the {added} tracks added so far.",
                    name = name,
                    reason = reason,
                    added = added
                );
            }
        }
    }
}

/// Runs everything after the prompts, from the code exchange to the
/// batched adds.
///
/// A failed exchange returns before any other remote call; a file without
/// valid links returns before the playlist is created. A failed batch stops
/// the run and reports how many tracks made it in (earlier batches stay).
async fn run_import<A: SpotifyApi>(
    api: &A,
    name: &str,
    description: &str,
    code: &str,
    file: &Path,
) -> Result<(), ImportError> {
    let token = api
        .exchange_code(code)
        .await
        .map_err(ImportError::ExchangeError)?;

    let user = api
        .current_user(&token.access_token)
        .await
        .map_err(ImportError::UserError)?;

    success!(
        "Authenticated as {}.",
        user.display_name.clone().unwrap_or_else(|| user.id.clone())
    );

    let track_uris = utils::read_track_uris(file)
        .await
        .map_err(ImportError::FileError)?;

    if track_uris.is_empty() {
        return Err(ImportError::NoTracks);
    }

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: true,
        collaborative: false,
    };

    info!("Create playlist {}", name);
    let playlist = api
        .create_playlist(&token.access_token, &user.id, &request)
        .await
        .map_err(ImportError::CreateError)?;

    info!("Add {} tracks to playlist {}", track_uris.len(), name);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Adding tracks to the playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let total = track_uris.len();
    let mut added = 0;

    for chunk in track_uris.chunks(spotify::playlist::ADD_TRACKS_LIMIT) {
        match api
            .add_tracks(&token.access_token, &playlist.id, chunk)
            .await
        {
            Ok(_) => {
                added += chunk.len();
                pb.set_message(format!(
                    "Added {added}/{total} tracks to playlist {name}",
                    added = added,
                    total = total,
                    name = name
                ));
            }
            Err(reason) => {
                pb.finish_and_clear();
                return Err(ImportError::AddError { added, reason });
            }
        }
    }

    pb.finish_and_clear();
    success!(
        "Playlist {} created successfully with {} tracks.",
        name,
        added
    );
    Ok(())
}

fn prompt_or_exit<T>(result: Result<T, PromptError>) -> T {
    match result {
        Ok(value) => value,
        Err(PromptError::Aborted) => {
            error!("Aborted.");
        }
        Err(PromptError::IoError(e)) => {
            error!("Failed to read input: {}", e);
        }
    }
}
