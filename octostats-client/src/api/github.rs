//! GitHub API client implementation

use async_trait::async_trait;
use tracing::debug;

use super::{ApiClientConfig, ApiErrorBody, ApiResult, RawProfile, RawRepo, TransportError, UserApiClient};

/// GitHub API client backed by reqwest
pub struct GitHubApiClient {
    client: reqwest::Client,
    config: ApiClientConfig,
}

impl GitHubApiClient {
    /// Create a new GitHub API client
    pub fn new(config: ApiClientConfig) -> ApiResult<Self> {
        let client = create_http_client(&config)?;

        debug!(base_url = %config.base_url, "Created GitHub API client");

        Ok(Self { client, config })
    }

    /// Make a GET request and surface non-success statuses as
    /// [`TransportError::Status`] with the error body's message attached.
    async fn get_request(&self, endpoint: &str) -> ApiResult<reqwest::Response> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        debug!(%url, "Making GitHub API request");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response)
    }
}

#[async_trait]
impl UserApiClient for GitHubApiClient {
    async fn fetch_profile(&self, username: &str) -> ApiResult<RawProfile> {
        let endpoint = format!("users/{}", urlencoding::encode(username));
        let response = self.get_request(&endpoint).await?;

        let profile = response.json::<RawProfile>().await?;
        Ok(profile)
    }

    async fn fetch_repos(&self, username: &str) -> ApiResult<Vec<RawRepo>> {
        let endpoint = format!("users/{}/repos", urlencoding::encode(username));
        let response = self.get_request(&endpoint).await?;

        let repos = response.json::<Vec<RawRepo>>().await?;
        Ok(repos)
    }
}

/// Helper to create the HTTP client with common configuration
fn create_http_client(config: &ApiClientConfig) -> ApiResult<reqwest::Client> {
    let mut headers = reqwest::header::HeaderMap::new();

    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/vnd.github.v3+json"),
    );
    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_str(&config.user_agent).map_err(|e| {
            TransportError::Client {
                detail: format!("invalid user agent: {}", e),
            }
        })?,
    );

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Turn a non-success response into a `Status` transport error, pulling the
/// `message` field out of the GitHub error body when one is present.
async fn status_error(response: reqwest::Response) -> TransportError {
    let status = response.status().as_u16();

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => None,
    };

    debug!(status, ?message, "GitHub API returned error status");

    TransportError::Status { status, message }
}
