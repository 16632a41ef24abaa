use http::StatusCode;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::settings::ClientConfig;
use crate::error::FetchError;
use crate::helpers::checksum::request_checksum;
use crate::sources::auth::AuthToken;
use crate::utils::constants::CHECKSUM_HEADER;

/// Fetch the NOC user ids, authorizing the request with a checksum over the
/// token and the users path. Retries per `config.retry`.
pub async fn fetch_user_ids(
    client: &Client,
    config: &ClientConfig,
    token: &AuthToken,
) -> Result<Vec<String>, FetchError> {
    let url = config.users_url();
    let checksum = request_checksum(token.as_str(), &config.users_path);
    info!("fetching user ids from {}", url);

    let ids = config
        .retry
        .run_with_retry(
            "fetch user ids",
            || request_user_ids(client, &url, &checksum),
            FetchError::is_retryable,
        )
        .await
        .map_err(|e| FetchError::from_retry("fetch user ids", e))?;

    info!("received {} user ids", ids.len());
    Ok(ids)
}

async fn request_user_ids(client: &Client, url: &str, checksum: &str) -> Result<Vec<String>, FetchError> {
    let response = client
        .get(url)
        .header(CHECKSUM_HEADER, checksum)
        .send()
        .await
        .map_err(|source| FetchError::Transport { url: url.to_owned(), source })?;

    let status = response.status();
    debug!("{} responded with {}", url, status);
    if status != StatusCode::OK {
        return Err(FetchError::Status { url: url.to_owned(), status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Body { url: url.to_owned(), source })?;
    Ok(parse_user_ids(&body))
}

/// Trim the whole body, then split on `\n`. Lines are kept as-is, in order.
pub fn parse_user_ids(body: &str) -> Vec<String> {
    body.trim().split('\n').map(str::to_owned).collect()
}
