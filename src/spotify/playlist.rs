use crate::{
    config::Config,
    spotify,
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse},
};

/// Creates a private playlist owned by the given user.
///
/// Playlist creation is not idempotent, so unlike the read-only calls it is
/// never retried; a transient failure surfaces to the handler rather than
/// risking duplicate playlists.
pub async fn create(
    config: &Config,
    token: &str,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let client = spotify::http_client(config)?;
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config.api_url,
        user_id = user_id
    );

    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&CreatePlaylistRequest {
            name: name.to_string(),
            public: false,
        })
        .send()
        .await?;

    response
        .error_for_status()?
        .json::<CreatePlaylistResponse>()
        .await
}

/// Submits a batch of track URIs to an existing playlist.
///
/// The batch is submitted even when empty so that a playlist whose songs all
/// failed to resolve still ends up created and reported as a success. Appends
/// are not idempotent either, so no retry here.
pub async fn add_tracks(
    config: &Config,
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let client = spotify::http_client(config)?;
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config.api_url,
        playlist_id = playlist_id
    );

    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&AddTracksRequest { uris })
        .send()
        .await?;

    response
        .error_for_status()?
        .json::<AddTracksResponse>()
        .await
}
