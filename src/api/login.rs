use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{server::AppState, spotify, warning};

pub async fn login(Extension(state): Extension<Arc<AppState>>) -> Response {
    match spotify::auth::build_authorize_url(&state.config) {
        Ok(url) => (StatusCode::FOUND, [(header::LOCATION, url)]).into_response(),
        Err(e) => {
            // Only reachable with an unparseable authorization URL.
            warning!("Failed to build authorization URL: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
