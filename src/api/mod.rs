//! # API Module
//!
//! This module provides the HTTP endpoints of the relay service. It is the
//! only layer that speaks to callers; everything underneath composes the
//! Spotify Web API on their behalf.
//!
//! ## Overview
//!
//! The relay exposes a deliberately small surface:
//!
//! - **OAuth flow**: a login redirector and the matching callback handler
//!   that completes the authorization-code exchange and stores the resulting
//!   access token for the rest of the process lifetime
//! - **Composition endpoints**: playlist building (create + resolve songs +
//!   batch add) and recommendation lookup (resolve seed + fetch similar)
//! - **Health monitoring**: a health check endpoint for deployment
//!   verification
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Redirects the caller's browser to Spotify's authorization
//!   page with the relay's client ID, scope, and redirect URI.
//! - [`callback`] - Handles the OAuth callback from Spotify's authorization
//!   server, exchanges the authorization code for an access token, and
//!   redirects the browser back to the configured front-end origin.
//!
//! ### Composition
//!
//! - [`create_playlist`] - Creates a private playlist and fills it with the
//!   tracks resolved from a list of free-text song descriptors, preserving
//!   input order and silently dropping descriptors with no match.
//! - [`recommend`] - Resolves a free-text seed to a track and returns up to
//!   ten similar tracks as human-readable strings.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status, version, and whether an access
//!   token is currently held.
//!
//! ## Error Policy
//!
//! Every handler catches failures at its boundary, logs the real cause to
//! the process's diagnostic stream, and answers with a fixed generic
//! status/message. Upstream error detail never reaches the caller; the one
//! distinguished condition is the recommendation lookup's 404 when a seed
//! matches no track.
//!
//! ## Architecture
//!
//! The module is built on the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function taking the shared
//! [`AppState`](crate::server::AppState) through an `Extension` layer, and
//! the handlers are wired into a router by [`crate::server`].

mod callback;
mod health;
mod login;
mod playlist;
mod recommend;

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use playlist::create_playlist;
pub use recommend::recommend;
