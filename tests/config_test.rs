use std::{env, time::Duration};

use tunerelay::config::Config;

// Environment mutation is process-global, so everything runs in one test
// function, sequentially.
#[test]
fn config_from_env_requirements_and_defaults() {
    unsafe {
        env::set_var("SPOTIFY_API_AUTH_CLIENT_ID", "id-1");
        env::set_var("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret-1");
        env::set_var("SPOTIFY_API_REDIRECT_URI", "http://localhost:3001/callback");
        env::set_var("FRONTEND_ORIGIN", "http://localhost:5173");
        env::remove_var("SPOTIFY_API_AUTH_URL");
        env::remove_var("SPOTIFY_API_TOKEN_URL");
        env::remove_var("SPOTIFY_API_URL");
        env::remove_var("PORT");
        env::remove_var("UPSTREAM_TIMEOUT_SECS");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.client_id, "id-1");
    assert_eq!(config.client_secret, "secret-1");
    assert_eq!(config.redirect_uri, "http://localhost:3001/callback");
    assert_eq!(config.frontend_origin, "http://localhost:5173");
    assert_eq!(config.auth_url, "https://accounts.spotify.com/authorize");
    assert_eq!(config.token_url, "https://accounts.spotify.com/api/token");
    assert_eq!(config.api_url, "https://api.spotify.com/v1");
    assert_eq!(config.port, 3001);
    assert_eq!(config.upstream_timeout, Duration::from_secs(10));

    unsafe {
        env::set_var("SPOTIFY_API_URL", "http://127.0.0.1:9090");
        env::set_var("PORT", "8080");
        env::set_var("UPSTREAM_TIMEOUT_SECS", "3");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_url, "http://127.0.0.1:9090");
    assert_eq!(config.port, 8080);
    assert_eq!(config.upstream_timeout, Duration::from_secs(3));

    // An unparseable port falls back to the default instead of failing
    unsafe {
        env::set_var("PORT", "not-a-port");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 3001);

    // A missing required variable is named in the error
    unsafe {
        env::remove_var("SPOTIFY_API_AUTH_CLIENT_ID");
    }
    let err = Config::from_env().unwrap_err();
    assert!(err.contains("SPOTIFY_API_AUTH_CLIENT_ID"));
}
