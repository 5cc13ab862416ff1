use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::{
    config::Config,
    spotify,
    types::{SearchResponse, TrackItem},
    warning,
};

/// Resolves a free-text song descriptor to a single track.
///
/// Issues a track-type search with a result limit of 1 and returns the best
/// match, or `None` when the descriptor matches nothing. Callers decide what
/// a miss means: the playlist builder silently drops the descriptor, the
/// recommendation lookup answers 404.
///
/// # Retry Logic
///
/// As a read-only request this call is retried on transient upstream
/// conditions: bounded exponential backoff on 502 Bad Gateway, and the
/// `Retry-After` delay on 429 when it stays within the relay's bound. All
/// other failures propagate immediately.
pub async fn find_track(
    config: &Config,
    token: &str,
    query: &str,
) -> Result<Option<TrackItem>, reqwest::Error> {
    let client = spotify::http_client(config)?;
    let mut attempts: u32 = 0;

    loop {
        let api_url = format!("{uri}/search", uri = &config.api_url);
        let response = client
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
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

        let res = response.json::<SearchResponse>().await?;

        return Ok(res.tracks.items.into_iter().next());
    }
}
