use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{Res, info, server::AppState, spotify, types::PlaylistRequest, warning};

/// Playlist name used when the request omits one.
const DEFAULT_PLAYLIST_NAME: &str = "My Auto Playlist";

pub async fn create_playlist(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<PlaylistRequest>,
) -> Response {
    match build_playlist(&state, &request).await {
        Ok(playlist_id) => Json(json!({
            "message": "Playlist created successfully!",
            "playlistId": playlist_id,
        }))
        .into_response(),
        Err(e) => {
            warning!("Failed to create playlist: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create playlist").into_response()
        }
    }
}

/// Creates the playlist and fills it with whatever the song list resolves to.
///
/// Songs are resolved strictly one after another so the submitted URIs keep
/// the input order; descriptors that match nothing are dropped without
/// surfacing an error. The batch submission happens even when every
/// descriptor missed. Any upstream failure aborts the whole operation - a
/// playlist created before the failure is left in place upstream.
async fn build_playlist(state: &AppState, request: &PlaylistRequest) -> Res<String> {
    let token = state.tokens.bearer().await?;

    let name = request
        .playlist_name
        .clone()
        .unwrap_or_else(|| DEFAULT_PLAYLIST_NAME.to_string());

    let playlist = spotify::playlist::create(&state.config, &token, &request.user_id, &name).await?;

    let mut uris: Vec<String> = Vec::new();
    for descriptor in &request.songs {
        if let Some(track) = spotify::search::find_track(&state.config, &token, descriptor).await? {
            uris.push(track.uri);
        }
    }

    info!(
        "Resolved {} of {} songs for playlist {}",
        uris.len(),
        request.songs.len(),
        playlist.id
    );

    spotify::playlist::add_tracks(&state.config, &token, &playlist.id, uris).await?;

    Ok(playlist.id)
}
