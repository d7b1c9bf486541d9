//! The fixed set of supported external platforms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a platform tracks competitive-programming activity or social activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Competitive,
    Social,
}

/// One of the ten supported external platforms.
///
/// The enum is closed on purpose: every table keyed by platform (canonical
/// field sets, mapping tables, fetch adapters) is matched exhaustively, so
/// adding a platform is a compile-time checklist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Leetcode,
    Codeforces,
    Codechef,
    Atcoder,
    Spoj,
    Github,
    Linkedin,
    Twitter,
    Facebook,
    Instagram,
}

impl Platform {
    /// Every supported platform, competitive first.
    pub const ALL: [Platform; 10] = [
        Platform::Leetcode,
        Platform::Codeforces,
        Platform::Codechef,
        Platform::Atcoder,
        Platform::Spoj,
        Platform::Github,
        Platform::Linkedin,
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
    ];

    #[must_use]
    pub const fn kind(self) -> PlatformKind {
        match self {
            Platform::Leetcode
            | Platform::Codeforces
            | Platform::Codechef
            | Platform::Atcoder
            | Platform::Spoj => PlatformKind::Competitive,
            Platform::Github
            | Platform::Linkedin
            | Platform::Twitter
            | Platform::Facebook
            | Platform::Instagram => PlatformKind::Social,
        }
    }

    /// Lowercase tag used in the API, the database, and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Leetcode => "leetcode",
            Platform::Codeforces => "codeforces",
            Platform::Codechef => "codechef",
            Platform::Atcoder => "atcoder",
            Platform::Spoj => "spoj",
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing a platform tag from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl std::str::FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leetcode" => Ok(Platform::Leetcode),
            "codeforces" => Ok(Platform::Codeforces),
            "codechef" => Ok(Platform::Codechef),
            "atcoder" => Ok(Platform::Atcoder),
            "spoj" => Ok(Platform::Spoj),
            "github" => Ok(Platform::Github),
            "linkedin" => Ok(Platform::Linkedin),
            "twitter" => Ok(Platform::Twitter),
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn all_contains_every_platform_exactly_once() {
        let mut seen = std::collections::HashSet::new();
        for platform in Platform::ALL {
            assert!(seen.insert(platform), "{platform} listed twice in ALL");
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_str(platform.as_str()).unwrap(), platform);
        }
    }

    #[test]
    fn kinds_split_five_and_five() {
        let competitive = Platform::ALL
            .iter()
            .filter(|p| p.kind() == PlatformKind::Competitive)
            .count();
        assert_eq!(competitive, 5);
    }

    #[test]
    fn from_str_rejects_unknown_tag() {
        let err = Platform::from_str("myspace").unwrap_err();
        assert_eq!(err, UnknownPlatform("myspace".to_string()));
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Platform::Codeforces).unwrap();
        assert_eq!(json, "\"codeforces\"");
        let back: Platform = serde_json::from_str("\"atcoder\"").unwrap();
        assert_eq!(back, Platform::Atcoder);
    }
}
