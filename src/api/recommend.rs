use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    server::AppState,
    spotify,
    types::{RecommendationRequest, TrackItem},
    warning,
};

/// Result size requested from the recommendations endpoint.
const RECOMMENDATION_LIMIT: u32 = 10;

pub async fn recommend(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let token = match state.tokens.bearer().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Recommendation lookup refused: {}", e);
            return transport_error();
        }
    };

    let seed_track = match spotify::search::find_track(&state.config, &token, &request.seed).await {
        Ok(track) => track,
        Err(e) => {
            warning!("Seed resolution failed: {}", e);
            return transport_error();
        }
    };

    let Some(seed_track) = seed_track else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No track found for seed input" })),
        )
            .into_response();
    };

    match spotify::recommendations::get_similar(
        &state.config,
        &token,
        &seed_track.id,
        RECOMMENDATION_LIMIT,
    )
    .await
    {
        Ok(tracks) => {
            let recommendations: Vec<String> = tracks.iter().map(display_name).collect();
            Json(json!({ "recommendations": recommendations })).into_response()
        }
        Err(e) => {
            warning!("Recommendation lookup failed: {}", e);
            transport_error()
        }
    }
}

/// `"<name> - <primary artist>"`, the display form the front-end renders.
fn display_name(track: &TrackItem) -> String {
    let artist = track
        .artists
        .first()
        .map(|a| a.name.as_str())
        .unwrap_or_default();
    format!("{} - {}", track.name, artist)
}

fn transport_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to get recommendations" })),
    )
        .into_response()
}
