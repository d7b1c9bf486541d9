//! Per-platform refresh outcomes.

use codefolio_core::{ExtractError, RawPayload};
use codefolio_fetch::UpstreamFailureKind;
use codefolio_stats::StatsSummary;

/// Result of one platform's attempt within a single refresh run.
///
/// Transient: outcomes drive the store commit and the API response, and are
/// never persisted themselves.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The platform refreshed; `summary` is fully populated and `raw` is the
    /// payload it was projected from.
    Success {
        summary: StatsSummary,
        raw: RawPayload,
    },
    /// The refresh failed at some step. `summary` carries the platform
    /// default; existing stored data for the platform must be left alone.
    Fallback {
        summary: StatsSummary,
        reason: FallbackReason,
    },
}

impl FetchOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }

    /// The summary carried by either variant, always the full canonical
    /// field set for the platform.
    #[must_use]
    pub const fn summary(&self) -> &StatsSummary {
        match self {
            FetchOutcome::Success { summary, .. } | FetchOutcome::Fallback { summary, .. } => {
                summary
            }
        }
    }
}

/// Why a platform's refresh fell back to default data.
#[derive(Debug, Clone)]
pub enum FallbackReason {
    /// The user has no link configured for this platform. Expected and
    /// quiet; no adapter call is made.
    NoLinkConfigured,
    /// The configured link could not be reduced to a username. The user can
    /// correct this by fixing the link.
    ExtractionFailed(ExtractError),
    /// The upstream fetch failed; transient or platform-side.
    UpstreamFailed(UpstreamFailureKind),
}

impl FallbackReason {
    /// Stable machine-readable code for API responses and logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FallbackReason::NoLinkConfigured => "no_link_configured",
            FallbackReason::ExtractionFailed(_) => "extraction_failed",
            FallbackReason::UpstreamFailed(kind) => kind.as_str(),
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NoLinkConfigured => write!(f, "no link configured"),
            FallbackReason::ExtractionFailed(e) => write!(f, "extraction failed: {e}"),
            FallbackReason::UpstreamFailed(kind) => write!(f, "upstream fetch failed: {kind}"),
        }
    }
}
