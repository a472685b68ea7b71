use serde_json::json;
use spimcli::config::Config;
use spimcli::spotify::auth::{authorization_url, token_from_response};

// Helper function to create a test configuration
fn create_test_config() -> Config {
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:8080/callback".to_string(),
        scope: "playlist-modify-public playlist-modify-private".to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "https://accounts.spotify.com/api/token".to_string(),
        api_url: "https://api.spotify.com/v1".to_string(),
    }
}

#[test]
fn test_authorization_url_contains_required_parameters() {
    let url = authorization_url(&create_test_config()).unwrap();

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=test-client-id"));
    assert!(url.contains("show_dialog=true"));
}

#[test]
fn test_authorization_url_encodes_redirect_uri() {
    let url = authorization_url(&create_test_config()).unwrap();

    // The redirect URI must survive as a single query value
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8080%2Fcallback"));
}

#[test]
fn test_authorization_url_encodes_scope() {
    let url = authorization_url(&create_test_config()).unwrap();

    assert!(url.contains("scope=playlist-modify-public+playlist-modify-private"));
}

#[test]
fn test_authorization_url_omits_the_client_secret() {
    // The secret belongs in the token exchange only, never in a browser URL
    let url = authorization_url(&create_test_config()).unwrap();

    assert!(!url.contains("test-client-secret"));
}

#[test]
fn test_token_from_response_complete() {
    let json = json!({
        "access_token": "BQC-access",
        "token_type": "Bearer",
        "scope": "playlist-modify-public",
        "expires_in": 3600,
        "refresh_token": "AQD-refresh"
    });

    let token = token_from_response(json).unwrap();
    assert_eq!(token.access_token, "BQC-access");
    assert_eq!(token.refresh_token, "AQD-refresh");
    assert_eq!(token.scope, "playlist-modify-public");
    assert_eq!(token.expires_in, 3600);
    assert!(token.obtained_at > 0);
}

#[test]
fn test_token_from_response_defaults_optional_fields() {
    let json = json!({ "access_token": "BQC-access" });

    let token = token_from_response(json).unwrap();
    assert_eq!(token.refresh_token, "");
    assert_eq!(token.scope, "");
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_token_from_response_missing_access_token() {
    let result = token_from_response(json!({ "token_type": "Bearer" }));

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("no access token"));
}

#[test]
fn test_token_from_response_empty_access_token() {
    let result = token_from_response(json!({ "access_token": "" }));

    assert!(result.is_err());
}

#[test]
fn test_token_from_response_surfaces_error_description() {
    let json = json!({
        "error": "invalid_grant",
        "error_description": "Invalid authorization code"
    });

    let result = token_from_response(json);
    assert_eq!(result.unwrap_err(), "Invalid authorization code");
}
