use std::path::Path;

use url::Url;

use crate::Res;

pub fn extract_track_id(url: &str) -> Option<String> {
    // Track links keep the id at a fixed position: open.spotify.com/track/<id>
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() <= 4 || parts[3] != "track" {
        return None;
    }

    let id = parts[4].split('?').next()?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

pub fn extract_auth_code(redirect_url: &str) -> Option<String> {
    // A pasted redirect may arrive without its scheme; parse again with one
    let url = Url::parse(redirect_url)
        .or_else(|_| Url::parse(&format!("https://{}", redirect_url)))
        .ok()?;
    url.query_pairs()
        .find(|(key, value)| key == "code" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

pub fn to_track_uri(id: &str) -> String {
    format!("spotify:track:{}", id)
}

pub fn collect_track_uris(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(extract_track_id)
        .map(|id| to_track_uri(&id))
        .collect()
}

pub async fn read_track_uris(path: &Path) -> Res<Vec<String>> {
    let contents = async_fs::read_to_string(path).await?;
    Ok(collect_track_uris(&contents))
}
