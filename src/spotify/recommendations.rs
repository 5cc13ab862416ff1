use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::{
    config::Config,
    spotify,
    types::{RecommendationsResponse, TrackItem},
    warning,
};

/// Fetches similarity-based recommendations seeded by a single track.
///
/// Queries the recommendations endpoint with `seed_tracks` set to the given
/// track ID and returns up to `limit` tracks in the order the upstream API
/// produced them; the relay preserves that order all the way to its caller.
///
/// # Retry Logic
///
/// Same policy as [`find_track`](crate::spotify::search::find_track): bounded
/// backoff on 502, honored `Retry-After` on 429, everything else propagates.
pub async fn get_similar(
    config: &Config,
    token: &str,
    track_id: &str,
    limit: u32,
) -> Result<Vec<TrackItem>, reqwest::Error> {
    let client = spotify::http_client(config)?;
    let limit = limit.to_string();
    let mut attempts: u32 = 0;

    loop {
        let api_url = format!("{uri}/recommendations", uri = &config.api_url);
        let response = client
            .get(&api_url)
            .query(&[("seed_tracks", track_id), ("limit", limit.as_str())])
            .bearer_auth(token)
            .send()
            .await;

        let response = match response {
            Ok(resp) => {
                let status = resp.status();
                if status == StatusCode::TOO_MANY_REQUESTS
                    && attempts < spotify::MAX_RETRY_ATTEMPTS
                {
                    let retry_after = resp
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(1);
                    if retry_after <= spotify::MAX_RETRY_AFTER_SECS {
                        sleep(Duration::from_secs(retry_after)).await;
                        attempts += 1;
                        continue; // retry
                    }
                    warning!(
                        "Upstream asked for a {}s retry delay; not waiting that long",
                        retry_after
                    );
                }
                if status == StatusCode::BAD_GATEWAY && attempts < spotify::MAX_RETRY_ATTEMPTS {
                    sleep(spotify::RETRY_BASE_DELAY * 2u32.pow(attempts)).await;
                    attempts += 1;
                    continue; // retry
                }
                resp.error_for_status()?
            }
            Err(err) => return Err(err), // network or reqwest error
        };

        let res = response.json::<RecommendationsResponse>().await?;

        return Ok(res.tracks);
    }
}
