use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{server::AppState, spotify, success, warning};

/// Fixed body for every callback failure; the real cause goes to the log.
const AUTH_FAILED: &str = "Authentication failed";

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let Some(code) = params.get("code") else {
        warning!("Callback hit without an authorization code");
        return (StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED).into_response();
    };

    match spotify::auth::exchange_code(&state.config, code).await {
        Ok(token) => {
            state.tokens.set(token).await;
            success!("Access token stored");
            (
                StatusCode::FOUND,
                [(header::LOCATION, state.config.frontend_origin.clone())],
            )
                .into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED).into_response()
        }
    }
}
