use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Url;

use crate::{config::Config, spotify, types::Token};

/// OAuth scope requested from Spotify: the relay only ever modifies
/// playlists on the user's behalf.
const AUTH_SCOPE: &str = "playlist-modify-public playlist-modify-private";

/// Builds the authorization URL the `/login` endpoint redirects to.
///
/// The query carries exactly the parameters Spotify's authorization-code flow
/// expects from a confidential client: `response_type=code`, the configured
/// client ID, the fixed playlist-modification scope, and the configured
/// redirect URI. Values are percent-encoded by the URL builder.
///
/// # Errors
///
/// Fails only when the configured authorization URL does not parse, which a
/// correctly configured deployment never hits.
pub fn build_authorize_url(config: &Config) -> Result<String, String> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("response_type", "code"),
            ("client_id", config.client_id.as_str()),
            ("scope", AUTH_SCOPE),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(url.into())
}

/// Exchanges an authorization code for an access token.
///
/// Performs the server-to-server half of the authorization-code flow: a
/// form-encoded POST of the code, grant type, and redirect URI to the token
/// endpoint, authenticated with HTTP Basic credentials derived from the
/// configured client ID and secret.
///
/// # Arguments
///
/// * `config` - Startup configuration with credentials and the token endpoint
/// * `code` - Authorization code received on the OAuth callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - the token response with a locally stamped `obtained_at`
/// - `Err(reqwest::Error)` - network error, non-2xx status, or a body that
///   does not deserialize into a token
///
/// # Error Handling
///
/// The exchange is deliberately not retried: a rejected code is single-use
/// and the caller answers the callback with a generic failure either way.
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly. The exchange
/// happens immediately within the callback request that delivered the code.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, reqwest::Error> {
    let credentials = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    let client = spotify::http_client(config)?;
    let res = client
        .post(&config.token_url)
        .header("Authorization", format!("Basic {}", credentials))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
        ])
        .send()
        .await?;

    let mut token = res.error_for_status()?.json::<Token>().await?;
    token.obtained_at = Utc::now().timestamp() as u64;

    Ok(token)
}
