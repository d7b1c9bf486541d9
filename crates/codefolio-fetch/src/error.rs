use codefolio_core::Platform;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the platform fetch adapters.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The username does not exist upstream.
    #[error("{platform} profile not found: {username}")]
    NotFound { platform: Platform, username: String },

    /// The upstream asked us to back off (HTTP 429 or an API-level limit).
    #[error("rate limited by {platform}")]
    RateLimited { platform: Platform },

    /// The request exceeded the client's bounded timeout.
    #[error("{platform} request timed out after {timeout_secs}s")]
    Timeout {
        platform: Platform,
        timeout_secs: u64,
    },

    /// A non-2xx status outside the mapped 404/429 cases.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body did not parse, or its envelope was missing the
    /// fields the adapter relies on.
    #[error("malformed {platform} response: {reason}")]
    MalformedResponse { platform: Platform, reason: String },

    /// A configured base URL could not be parsed or joined.
    #[error("invalid {platform} endpoint: {reason}")]
    InvalidEndpoint { platform: Platform, reason: String },
}

/// Coarse classification of an upstream failure, used in refresh outcomes
/// and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamFailureKind {
    NotFound,
    RateLimited,
    Timeout,
    MalformedResponse,
    Transport,
}

impl UpstreamFailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UpstreamFailureKind::NotFound => "not_found",
            UpstreamFailureKind::RateLimited => "rate_limited",
            UpstreamFailureKind::Timeout => "timeout",
            UpstreamFailureKind::MalformedResponse => "malformed_response",
            UpstreamFailureKind::Transport => "transport",
        }
    }
}

impl std::fmt::Display for UpstreamFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchError {
    /// Map this error to its [`UpstreamFailureKind`].
    ///
    /// Transport covers connect-level and unexpected-status failures that
    /// are neither a missing profile nor a parse problem.
    #[must_use]
    pub fn kind(&self) -> UpstreamFailureKind {
        match self {
            FetchError::NotFound { .. } => UpstreamFailureKind::NotFound,
            FetchError::RateLimited { .. } => UpstreamFailureKind::RateLimited,
            FetchError::Timeout { .. } => UpstreamFailureKind::Timeout,
            FetchError::MalformedResponse { .. } => UpstreamFailureKind::MalformedResponse,
            FetchError::Http(_)
            | FetchError::UnexpectedStatus { .. }
            | FetchError::InvalidEndpoint { .. } => UpstreamFailureKind::Transport,
        }
    }
}
