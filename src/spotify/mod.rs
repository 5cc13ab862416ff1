//! # Spotify Integration Module
//!
//! This module provides the relay's interface to the Spotify Web API. It
//! implements the OAuth2 authorization-code exchange and the data operations
//! the relay composes (track search, playlist creation and population,
//! similarity-based recommendations), handling all HTTP communication, error
//! propagation, and rate limiting.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Handler Layer (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorize URL, code exchange)
//!     ├── Search (descriptor → track resolution)
//!     ├── Playlist Operations (create, add tracks)
//!     └── Recommendations (seeded similarity lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The relay is a confidential OAuth2 client: the token exchange authenticates
//! with HTTP Basic credentials built from the configured client ID and secret.
//! The resulting bearer token is handed to every data operation by the caller;
//! this module holds no token state of its own.
//!
//! ## Error Handling
//!
//! All functions return `Result<_, reqwest::Error>`. Non-2xx upstream
//! responses are converted to errors via `error_for_status`, malformed bodies
//! surface as JSON deserialization errors, and both propagate unchanged to
//! the handler layer, which flattens them into generic responses. Two
//! transient conditions are retried in place, bounded at a few attempts:
//!
//! - **502 Bad Gateway** - retried with exponential backoff
//! - **429 Too Many Requests** - retried after the `Retry-After` delay,
//!   provided the requested delay stays within a sane bound
//!
//! The token exchange itself is never retried; a rejected or failed exchange
//! is terminal for that callback request.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - authorization-code token exchange
//! - `GET /search` - track resolution for free-text descriptors
//! - `POST /users/{user_id}/playlists` - playlist creation
//! - `POST /playlists/{playlist_id}/tracks` - batch track submission
//! - `GET /recommendations` - similarity lookup seeded by one track
//!
//! ## Configuration Integration
//!
//! Every function takes the startup [`Config`](crate::config::Config), which
//! supplies endpoint URLs (overridable for tests), client credentials, and
//! the per-request upstream timeout.

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;

pub mod auth;
pub mod playlist;
pub mod recommendations;
pub mod search;

/// Upper bound on retry attempts for transient upstream failures.
pub(crate) const MAX_RETRY_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff between retries.
pub(crate) const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

/// Longest `Retry-After` delay the relay is willing to honor, in seconds.
pub(crate) const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Builds an HTTP client with the configured upstream timeout applied.
pub(crate) fn http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(config.upstream_timeout).build()
}
