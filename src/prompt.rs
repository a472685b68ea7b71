//! Interactive terminal prompts for the import flow.
//!
//! Every prompt reads one line from stdin and re-asks until the input is
//! usable. Reaching end of input (Ctrl-D or a closed pipe) aborts the
//! prompt with [`PromptError::Aborted`] so the caller can stop cleanly
//! instead of looping forever. The loops themselves are generic over any
//! buffered reader, which is how the tests drive them.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use colored::Colorize;

use crate::{info, utils, warning};

const DESCRIPTION_LABEL: &str = "Playlist description (optional)";

#[derive(Debug)]
pub enum PromptError {
    Aborted,
    IoError(io::Error),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        PromptError::IoError(err)
    }
}

/// Asks for the playlist name. Empty names are asked again.
pub fn playlist_name() -> Result<String, PromptError> {
    playlist_name_from(&mut io::stdin().lock())
}

fn playlist_name_from<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    loop {
        let name = read_line(input, "Playlist name")?;
        if !name.is_empty() {
            return Ok(name);
        }
        warning!("A playlist name is required.");
    }
}

/// Asks for the playlist description. May be left empty.
pub fn playlist_description() -> Result<String, PromptError> {
    playlist_description_from(&mut io::stdin().lock())
}

fn playlist_description_from<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    read_line(input, DESCRIPTION_LABEL)
}

/// Asks for the full redirect URL from the browser address bar and keeps
/// asking until an authorization code can be extracted from it.
pub fn authorization_code() -> Result<String, PromptError> {
    authorization_code_from(&mut io::stdin().lock())
}

fn authorization_code_from<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    loop {
        let pasted = read_line(input, "Paste the URL you were redirected to")?;
        match utils::extract_auth_code(&pasted) {
            Some(code) => return Ok(code),
            None => warning!("No authorization code found in that URL."),
        }
    }
}

/// Asks for the track list file and keeps asking until the path points to
/// an existing file. The 100 link limit is guidance for the operator, not
/// enforced here; larger files are split into batches later.
pub fn track_file() -> Result<PathBuf, PromptError> {
    track_file_from(&mut io::stdin().lock())
}

fn track_file_from<R: BufRead>(input: &mut R) -> Result<PathBuf, PromptError> {
    info!("Select a text file containing Spotify track links (limit 100).");
    loop {
        let entered = read_line(input, "Path to the track list file")?;
        if entered.is_empty() {
            warning!("A file path is required.");
            continue;
        }

        let path = PathBuf::from(&entered);
        if path.is_file() {
            return Ok(path);
        }
        warning!("No file found at {}.", path.display());
    }
}

fn read_line<R: BufRead>(input: &mut R, label: &str) -> Result<String, PromptError> {
    print!("[{}] {}: ", "?".cyan(), label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // end of input, keep the shell prompt on a fresh line
        println!();
        return Err(PromptError::Aborted);
    }
    Ok(line.trim().to_string())
}
