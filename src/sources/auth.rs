use std::fmt;

use http::{HeaderMap, StatusCode};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::settings::ClientConfig;
use crate::error::FetchError;
use crate::utils::constants::AUTH_TOKEN_HEADER;

/// Opaque token issued by the auth endpoint, valid for one program run.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// keep the credential out of logs
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"***").finish()
    }
}

/// Fetch the auth token, retrying per `config.retry`.
pub async fn fetch_auth_token(client: &Client, config: &ClientConfig) -> Result<AuthToken, FetchError> {
    let url = config.auth_url();
    info!("fetching auth token from {}", url);

    let token = config
        .retry
        .run_with_retry(
            "fetch auth token",
            || request_auth_token(client, &url),
            FetchError::is_retryable,
        )
        .await
        .map_err(|e| FetchError::from_retry("fetch auth token", e))?;

    info!("auth token received");
    Ok(token)
}

async fn request_auth_token(client: &Client, url: &str) -> Result<AuthToken, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport { url: url.to_owned(), source })?;

    let status = response.status();
    debug!("{} responded with {}", url, status);
    if status != StatusCode::OK {
        return Err(FetchError::Status { url: url.to_owned(), status });
    }

    Ok(token_from_headers(url, response.headers()))
}

/// An absent header means an empty token, the users call still goes out.
fn token_from_headers(url: &str, headers: &HeaderMap) -> AuthToken {
    match headers.get(&AUTH_TOKEN_HEADER) {
        Some(value) => AuthToken::new(String::from_utf8_lossy(value.as_bytes())),
        None => {
            warn!("{} responded without a {} header, using an empty token", url, AUTH_TOKEN_HEADER);
            AuthToken::new("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resilience::retry::RetrySettings;
    use http::HeaderValue;
    use httpmock::Method::GET;
    use httpmock::MockServer;

    fn test_config(server: &MockServer, attempts: u32) -> ClientConfig {
        ClientConfig {
            retry: RetrySettings::new(attempts, 10),
            ..ClientConfig::with_base_url(server.base_url())
        }
    }

    #[tokio::test]
    async fn returns_header_value_on_200() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(GET).path("/auth");
                then.status(200).header("Badsec-Authentication-Token", "T");
            })
            .await;

        let token = fetch_auth_token(&Client::new(), &test_config(&server, 3)).await.unwrap();

        assert_eq!(token.as_str(), "T");
        auth.assert_calls_async(1).await;
    }

    #[tokio::test]
    async fn always_failing_endpoint_exhausts_retries() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(GET).path("/auth");
                then.status(503);
            })
            .await;

        let err = fetch_auth_token(&Client::new(), &test_config(&server, 3)).await.unwrap_err();

        match err {
            FetchError::Exhausted { attempts, last, .. } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last, FetchError::Status { status: StatusCode::SERVICE_UNAVAILABLE, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        auth.assert_calls_async(3).await;
    }

    #[tokio::test]
    async fn client_errors_are_retried_too() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(GET).path("/auth");
                then.status(400);
            })
            .await;

        let err = fetch_auth_token(&Client::new(), &test_config(&server, 2)).await.unwrap_err();

        assert!(matches!(err, FetchError::Exhausted { attempts: 2, .. }));
        auth.assert_calls_async(2).await;
    }

    #[tokio::test]
    async fn missing_header_yields_empty_token_without_retry() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(GET).path("/auth");
                then.status(200);
            })
            .await;

        let token = fetch_auth_token(&Client::new(), &test_config(&server, 3)).await.unwrap();

        assert_eq!(token.as_str(), "");
        auth.assert_calls_async(1).await;
    }

    #[test]
    fn non_ascii_header_bytes_are_kept_lossily() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_bytes(b"caf\xc3\xa9").unwrap());
        assert_eq!(token_from_headers("http://localhost/auth", &headers).as_str(), "caf\u{e9}");

        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_bytes(b"tok\xff").unwrap());
        assert_eq!(token_from_headers("http://localhost/auth", &headers).as_str(), "tok\u{fffd}");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_failure() {
        // nothing listens on port 9 locally
        let config = ClientConfig {
            retry: RetrySettings::new(2, 1),
            ..ClientConfig::with_base_url("http://127.0.0.1:9")
        };

        let err = fetch_auth_token(&Client::new(), &config).await.unwrap_err();

        match err {
            FetchError::Exhausted { attempts, last, .. } => {
                assert_eq!(attempts, 2);
                assert!(matches!(*last, FetchError::Transport { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_token() {
        let token = AuthToken::new("secret-value");
        assert!(!format!("{token:?}").contains("secret-value"));
    }
}
