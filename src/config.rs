//! Configuration management for the Spotify relay service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. Configuration is read exactly once
//! at startup into a [`Config`] value that is then shared with every handler;
//! a missing required variable is a startup failure, never a per-request
//! condition.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::{env, time::Duration};

use dotenv;

/// Default listening port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3001;

/// Default per-request timeout for upstream calls, in seconds.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are ignored; deployments commonly provide the environment
/// directly and only local development uses a `.env` file.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Runtime configuration for the relay, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret. Never logged.
    pub client_secret: String,
    /// OAuth redirect URI registered with the Spotify application; Spotify
    /// sends the authorization code here, so it must resolve to `/callback`.
    pub redirect_uri: String,
    /// The single front-end origin allowed by CORS and redirected to after a
    /// successful callback.
    pub frontend_origin: String,
    /// Spotify authorization endpoint.
    pub auth_url: String,
    /// Spotify token exchange endpoint.
    pub token_url: String,
    /// Spotify Web API base URL.
    pub api_url: String,
    /// Listening port for the relay itself.
    pub port: u16,
    /// Timeout applied to every outbound upstream call.
    pub upstream_timeout: Duration,
}

impl Config {
    /// Builds a [`Config`] from the process environment.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`
    /// - `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// - `SPOTIFY_API_REDIRECT_URI`
    /// - `FRONTEND_ORIGIN`
    ///
    /// Optional, with defaults:
    /// - `SPOTIFY_API_AUTH_URL` (Spotify's authorization endpoint)
    /// - `SPOTIFY_API_TOKEN_URL` (Spotify's token endpoint)
    /// - `SPOTIFY_API_URL` (Spotify's Web API base)
    /// - `PORT` (3001)
    /// - `UPSTREAM_TIMEOUT_SECS` (10)
    ///
    /// The endpoint URLs are overridable so a test suite can point the relay
    /// at a local mock upstream.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first missing required variable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: require("SPOTIFY_API_REDIRECT_URI")?,
            frontend_origin: require("FRONTEND_ORIGIN")?,
            auth_url: env::var("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            ),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
