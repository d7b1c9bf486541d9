//! Shared HTTP client for the platform fetch adapters.
//!
//! Wraps `reqwest` with per-platform base URLs, bounded timeouts, optional
//! upstream credentials, and the common status → error mapping. Individual
//! adapters own their endpoint paths and envelope handling.

use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client, StatusCode, Url};
use serde_json::Value;

use codefolio_core::{AppConfig, Platform, RawPayload};

use crate::endpoints::Endpoints;
use crate::error::FetchError;
use crate::platforms;

/// HTTP client shared by all ten platform adapters.
///
/// Use [`FetchClient::from_app_config`] in production or
/// [`FetchClient::with_endpoints`] to point platforms at a mock server in
/// tests.
pub struct FetchClient {
    http: Client,
    endpoints: Endpoints,
    timeout_secs: u64,
    github_token: Option<String>,
    twitter_bearer_token: Option<String>,
}

impl FetchClient {
    /// Creates a client pointed at the production upstreams.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        Self::with_endpoints(timeout_secs, user_agent, Endpoints::default())
    }

    /// Creates a client with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoints(
        timeout_secs: u64,
        user_agent: &str,
        endpoints: Endpoints,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            endpoints,
            timeout_secs,
            github_token: None,
            twitter_bearer_token: None,
        })
    }

    /// Creates a client from the application config, attaching any
    /// configured upstream credentials.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Self::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
        Ok(client.with_tokens(config.github_token.clone(), config.twitter_bearer_token.clone()))
    }

    /// Attach optional upstream credentials (GitHub token, Twitter bearer).
    #[must_use]
    pub fn with_tokens(mut self, github: Option<String>, twitter: Option<String>) -> Self {
        self.github_token = github;
        self.twitter_bearer_token = twitter;
        self
    }

    /// Fetch the raw profile payload for `username` on `platform`.
    ///
    /// The returned tree is platform-specific and unmodified apart from
    /// envelope unwrapping; normalization happens downstream. Business-level
    /// absence of data (zero repos, zero solved) is a valid payload, not an
    /// error.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] if the username does not exist upstream.
    /// - [`FetchError::RateLimited`] on HTTP 429 or an API-level limit.
    /// - [`FetchError::Timeout`] when the bounded timeout elapses.
    /// - [`FetchError::MalformedResponse`] if the body does not parse or the
    ///   envelope is missing required fields.
    /// - [`FetchError::Http`] / [`FetchError::UnexpectedStatus`] on other
    ///   transport-level failures.
    pub async fn fetch(
        &self,
        platform: Platform,
        username: &str,
    ) -> Result<RawPayload, FetchError> {
        let payload = platforms::dispatch(self, platform, username).await?;
        tracing::debug!(platform = %platform, username, "fetched raw profile payload");
        Ok(payload)
    }

    /// Builds the full request URL for a platform-relative path.
    ///
    /// The configured base URL is normalised to end with exactly one slash so
    /// joining appends to the path rather than replacing its last segment.
    pub(crate) fn join(&self, platform: Platform, path: &str) -> Result<Url, FetchError> {
        let base = self.endpoints.base_for(platform);
        let normalised = format!("{}/", base.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| FetchError::InvalidEndpoint {
                platform,
                reason: format!("invalid base URL '{base}': {e}"),
            })?;
        base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidEndpoint {
                platform,
                reason: format!("cannot join '{path}': {e}"),
            })
    }

    /// Sends a GET request, maps the status, and parses the body as JSON.
    pub(crate) async fn get_json(
        &self,
        platform: Platform,
        username: &str,
        url: Url,
    ) -> Result<Value, FetchError> {
        let mut request = self.http.get(url.clone());
        if let Some(header) = self.auth_header(platform) {
            request = request.header(AUTHORIZATION, header);
        }
        let response = request
            .send()
            .await
            .map_err(|e| self.classify_transport(platform, e))?;
        Self::check_status(platform, username, &url, response.status())?;
        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport(platform, e))?;
        serde_json::from_str(&body).map_err(|e| FetchError::MalformedResponse {
            platform,
            reason: e.to_string(),
        })
    }

    /// Sends a POST request with a JSON body, maps the status, and parses
    /// the response as JSON. Used by the GraphQL-shaped upstreams.
    pub(crate) async fn post_json(
        &self,
        platform: Platform,
        username: &str,
        url: Url,
        body: &Value,
    ) -> Result<Value, FetchError> {
        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_transport(platform, e))?;
        Self::check_status(platform, username, &url, response.status())?;
        let text = response
            .text()
            .await
            .map_err(|e| self.classify_transport(platform, e))?;
        serde_json::from_str(&text).map_err(|e| FetchError::MalformedResponse {
            platform,
            reason: e.to_string(),
        })
    }

    fn auth_header(&self, platform: Platform) -> Option<String> {
        match platform {
            Platform::Github => self
                .github_token
                .as_ref()
                .map(|token| format!("Bearer {token}")),
            Platform::Twitter => self
                .twitter_bearer_token
                .as_ref()
                .map(|token| format!("Bearer {token}")),
            _ => None,
        }
    }

    fn classify_transport(&self, platform: Platform, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                platform,
                timeout_secs: self.timeout_secs,
            }
        } else {
            FetchError::Http(err)
        }
    }

    fn check_status(
        platform: Platform,
        username: &str,
        url: &Url,
        status: StatusCode,
    ) -> Result<(), FetchError> {
        if status.is_success() {
            return Ok(());
        }
        match status {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound {
                platform,
                username: username.to_string(),
            }),
            StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited { platform }),
            other => Err(FetchError::UnexpectedStatus {
                status: other.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}
