use tokio::sync::Mutex;

use crate::types::Token;

/// Owner of the process-wide Spotify access token.
///
/// The relay holds exactly one credential: the bearer token obtained by the
/// most recent successful `/callback` exchange. It is written only there and
/// read by every authenticated handler; a later exchange simply overwrites
/// the previous token (last write wins). The token is never persisted and its
/// expiry is not managed - an expired token surfaces as an upstream 401,
/// which handlers report as their generic failure.
pub struct TokenStore {
    token: Mutex<Option<Token>>,
}

impl TokenStore {
    pub fn new() -> Self {
        TokenStore {
            token: Mutex::new(None),
        }
    }

    /// Replaces the stored token with the result of a fresh exchange.
    pub async fn set(&self, token: Token) {
        let mut guard = self.token.lock().await;
        *guard = Some(token);
    }

    /// Returns the current access token value for a Bearer header.
    ///
    /// # Errors
    ///
    /// Fails when no exchange has succeeded yet; callers turn this into
    /// their generic error response.
    pub async fn bearer(&self) -> Result<String, String> {
        let guard = self.token.lock().await;
        match guard.as_ref() {
            Some(token) => Ok(token.access_token.clone()),
            None => Err("no access token available; complete /login first".to_string()),
        }
    }

    /// Snapshot of the stored token, if any.
    pub async fn current(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
