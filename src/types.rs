use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
    // Stamped locally after the exchange; not part of the wire response.
    #[serde(default, skip_deserializing)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRequest {
    pub user_id: String,
    pub playlist_name: Option<String>,
    pub songs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub seed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<TrackItem>,
}
