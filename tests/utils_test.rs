use spimcli::spotify::playlist::ADD_TRACKS_LIMIT;
use spimcli::utils::*;

#[test]
fn test_extract_track_id_plain_link() {
    let id = extract_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(id, Some("4uLU6hMCjMI75M1A2tKUQC".to_string()));
}

#[test]
fn test_extract_track_id_strips_query_parameters() {
    // Share links carry tracking parameters after the id
    let id = extract_track_id(
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123&utm_source=copy-link",
    );
    assert_eq!(id, Some("4uLU6hMCjMI75M1A2tKUQC".to_string()));
}

#[test]
fn test_extract_track_id_rejects_non_track_links() {
    // Album and playlist links have a different segment where "track" is expected
    assert_eq!(
        extract_track_id("https://open.spotify.com/album/1ATL5GLyefJaxhQzSPVrLX"),
        None
    );
    assert_eq!(
        extract_track_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"),
        None
    );
}

#[test]
fn test_extract_track_id_rejects_short_input() {
    assert_eq!(extract_track_id("https://open.spotify.com/track"), None);
    assert_eq!(extract_track_id("not a link"), None);
    assert_eq!(extract_track_id(""), None);

    // Without a scheme the segments shift and the link no longer matches
    assert_eq!(
        extract_track_id("open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        None
    );
}

#[test]
fn test_extract_track_id_rejects_empty_id() {
    assert_eq!(extract_track_id("https://open.spotify.com/track/"), None);
    assert_eq!(
        extract_track_id("https://open.spotify.com/track/?si=abc123"),
        None
    );
}

#[test]
fn test_extract_track_id_checks_position_not_host() {
    // Only the path layout is checked, not the host
    let id = extract_track_id("https://example.com/track/abc123");
    assert_eq!(id, Some("abc123".to_string()));

    // Locale-prefixed links shift "track" out of the expected position
    assert_eq!(
        extract_track_id("https://open.spotify.com/intl-de/track/4uLU6hMCjMI75M1A2tKUQC"),
        None
    );
}

#[test]
fn test_extract_auth_code_from_redirect() {
    let code = extract_auth_code("http://127.0.0.1:8080/callback?code=AQBx42&state=xyz");
    assert_eq!(code, Some("AQBx42".to_string()));
}

#[test]
fn test_extract_auth_code_without_scheme() {
    // Pastes that lost their scheme still carry the code
    let code = extract_auth_code("127.0.0.1:8080/callback?code=AQBx42&state=xyz");
    assert_eq!(code, Some("AQBx42".to_string()));

    let code = extract_auth_code("example.com/callback?code=AQBx42");
    assert_eq!(code, Some("AQBx42".to_string()));
}

#[test]
fn test_extract_auth_code_missing_parameter() {
    assert_eq!(
        extract_auth_code("http://127.0.0.1:8080/callback?state=xyz"),
        None
    );
    assert_eq!(extract_auth_code("http://127.0.0.1:8080/callback"), None);
}

#[test]
fn test_extract_auth_code_empty_value() {
    assert_eq!(extract_auth_code("http://127.0.0.1:8080/callback?code="), None);
}

#[test]
fn test_extract_auth_code_denied_consent() {
    // Denied consent redirects carry an error parameter instead of a code
    assert_eq!(
        extract_auth_code("http://127.0.0.1:8080/callback?error=access_denied"),
        None
    );
}

#[test]
fn test_extract_auth_code_rejects_garbage() {
    assert_eq!(extract_auth_code("not a url"), None);
    assert_eq!(extract_auth_code(""), None);
}

#[test]
fn test_to_track_uri() {
    assert_eq!(
        to_track_uri("4uLU6hMCjMI75M1A2tKUQC"),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_collect_track_uris_keeps_file_order() {
    let contents = "https://open.spotify.com/track/aaa111\n\
                    https://open.spotify.com/track/bbb222?si=share\n\
                    https://open.spotify.com/track/ccc333\n";

    let uris = collect_track_uris(contents);
    assert_eq!(
        uris,
        vec![
            "spotify:track:aaa111",
            "spotify:track:bbb222",
            "spotify:track:ccc333"
        ]
    );
}

#[test]
fn test_collect_track_uris_skips_unparsable_lines() {
    // valid, garbage, valid, blank, valid: the survivors keep their order
    let contents = "https://open.spotify.com/track/aaa111\n\
                    some note the user left\n\
                    https://open.spotify.com/track/bbb222\n\
                    \n\
                    https://open.spotify.com/track/ccc333\n";

    let uris = collect_track_uris(contents);
    assert_eq!(
        uris,
        vec![
            "spotify:track:aaa111",
            "spotify:track:bbb222",
            "spotify:track:ccc333"
        ]
    );

    // Non-track links are dropped the same way
    let uris = collect_track_uris("https://open.spotify.com/album/xyz\n");
    assert!(uris.is_empty());
}

#[test]
fn test_collect_track_uris_trims_whitespace() {
    // Windows line endings and stray indentation should not break parsing
    let contents = "  https://open.spotify.com/track/aaa111  \r\n\
                    \thttps://open.spotify.com/track/bbb222\r\n";

    let uris = collect_track_uris(contents);
    assert_eq!(uris, vec!["spotify:track:aaa111", "spotify:track:bbb222"]);
}

#[test]
fn test_collect_track_uris_keeps_duplicates() {
    // The same link twice means the track is wanted twice
    let contents = "https://open.spotify.com/track/aaa111\n\
                    https://open.spotify.com/track/aaa111\n";

    let uris = collect_track_uris(contents);
    assert_eq!(uris, vec!["spotify:track:aaa111", "spotify:track:aaa111"]);
}

#[test]
fn test_collect_track_uris_empty_input() {
    assert!(collect_track_uris("").is_empty());
    assert!(collect_track_uris("\n\n   \n").is_empty());
}

#[test]
fn test_track_batches_stay_within_limit() {
    let uris: Vec<String> = (0..250).map(|i| to_track_uri(&format!("id{}", i))).collect();

    let batches: Vec<&[String]> = uris.chunks(ADD_TRACKS_LIMIT).collect();
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 100);
    assert_eq!(batches[1].len(), 100);
    assert_eq!(batches[2].len(), 50);

    // Order survives the chunking
    assert_eq!(batches[0][0], "spotify:track:id0");
    assert_eq!(batches[2][49], "spotify:track:id249");

    // No tracks, no batches
    let empty: Vec<String> = Vec::new();
    assert!(empty.chunks(ADD_TRACKS_LIMIT).next().is_none());
}
