//! Canonical-username extraction from user-supplied profile URLs.
//!
//! Users paste profile links in every imaginable shape: with or without a
//! scheme, with `www.`, with trailing slashes, query strings, or as a bare
//! handle. Extraction is deterministic string work over those shapes; it
//! never touches the network.

use regex::Regex;
use thiserror::Error;

use crate::platform::Platform;

/// Why a raw URL could not be reduced to a canonical username.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("profile URL is empty")]
    EmptyInput,

    #[error("host \"{host}\" does not belong to {platform}")]
    DomainMismatch { platform: Platform, host: String },

    #[error("no username segment found in \"{url}\"")]
    MissingUsername { url: String },

    #[error("\"{username}\" is not a valid {platform} username")]
    InvalidUsername { platform: Platform, username: String },
}

/// Hosts accepted for each platform, without the `www.` prefix.
const fn accepted_hosts(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Leetcode => &["leetcode.com"],
        Platform::Codeforces => &["codeforces.com"],
        Platform::Codechef => &["codechef.com"],
        Platform::Atcoder => &["atcoder.jp"],
        Platform::Spoj => &["spoj.com"],
        Platform::Github => &["github.com"],
        Platform::Linkedin => &["linkedin.com"],
        Platform::Twitter => &["twitter.com", "x.com"],
        Platform::Facebook => &["facebook.com"],
        Platform::Instagram => &["instagram.com"],
    }
}

/// Extract the canonical username for `platform` from a user-supplied string.
///
/// Accepts full URLs (`https://github.com/alice`), scheme-less URLs
/// (`leetcode.com/u/bob`), and bare handles (`alice`) where the input has no
/// URL structure at all. The host comparison is case-insensitive and ignores
/// a leading `www.`; the username's own case is preserved.
///
/// # Errors
///
/// - [`ExtractError::EmptyInput`] if the string is empty after trimming.
/// - [`ExtractError::DomainMismatch`] if the host is not one of the
///   platform's accepted hosts.
/// - [`ExtractError::MissingUsername`] if the path holds no username segment
///   (e.g. `codeforces.com/contests`).
/// - [`ExtractError::InvalidUsername`] if the segment fails the platform's
///   username format.
pub fn extract_username(platform: Platform, raw_url: &str) -> Result<String, ExtractError> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    // No slash and no dot means there is no URL structure to parse; treat
    // the whole string as a candidate handle.
    if !trimmed.contains('/') && !trimmed.contains('.') {
        return validate_username(platform, trimmed);
    }

    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);

    let (host_part, path_part) = match without_scheme.split_once('/') {
        Some((host, path)) => (host, path),
        None => (without_scheme, ""),
    };

    let host_lower = host_part.to_ascii_lowercase();
    let host = host_lower.strip_prefix("www.").unwrap_or(&host_lower);

    if !accepted_hosts(platform).contains(&host) {
        return Err(ExtractError::DomainMismatch {
            platform,
            host: host.to_string(),
        });
    }

    // Query strings and fragments never carry the username.
    let path = path_part
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let candidate = username_segment(platform, &mut segments);
    match candidate {
        Some(username) => validate_username(platform, username),
        None => Err(ExtractError::MissingUsername {
            url: trimmed.to_string(),
        }),
    }
}

/// Pick the path segment that carries the username, per platform rule.
fn username_segment<'a>(
    platform: Platform,
    segments: &mut impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    match platform {
        // leetcode.com/u/<name> is the current form; leetcode.com/<name>
        // is the legacy one and still redirects.
        Platform::Leetcode => match segments.next()? {
            "u" => segments.next(),
            name => Some(name),
        },
        Platform::Codeforces => match segments.next()? {
            "profile" => segments.next(),
            _ => None,
        },
        Platform::Codechef | Platform::Atcoder | Platform::Spoj => match segments.next()? {
            "users" => segments.next(),
            _ => None,
        },
        Platform::Linkedin => match segments.next()? {
            "in" => segments.next(),
            _ => None,
        },
        Platform::Github
        | Platform::Twitter
        | Platform::Facebook
        | Platform::Instagram => segments.next(),
    }
}

fn validate_username(platform: Platform, username: &str) -> Result<String, ExtractError> {
    let pattern = match platform {
        // GitHub allows alphanumerics and interior hyphens, max 39 chars.
        Platform::Github => r"^[A-Za-z0-9][A-Za-z0-9-]{0,38}$",
        Platform::Linkedin => r"^[A-Za-z0-9-]{3,100}$",
        _ => r"^[A-Za-z0-9_][A-Za-z0-9_.-]{0,63}$",
    };
    let re = Regex::new(pattern).expect("valid username regex");
    if re.is_match(username) {
        Ok(username.to_string())
    } else {
        Err(ExtractError::InvalidUsername {
            platform,
            username: username.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_full_url() {
        let name = extract_username(Platform::Github, "https://github.com/alice").unwrap();
        assert_eq!(name, "alice");
    }

    #[test]
    fn leetcode_without_scheme() {
        let name = extract_username(Platform::Leetcode, "leetcode.com/u/bob").unwrap();
        assert_eq!(name, "bob");
    }

    #[test]
    fn leetcode_legacy_path() {
        let name = extract_username(Platform::Leetcode, "https://leetcode.com/bob/").unwrap();
        assert_eq!(name, "bob");
    }

    #[test]
    fn codeforces_profile_path() {
        let name =
            extract_username(Platform::Codeforces, "http://codeforces.com/profile/tourist")
                .unwrap();
        assert_eq!(name, "tourist");
    }

    #[test]
    fn codeforces_non_profile_path_is_missing_username() {
        let err = extract_username(Platform::Codeforces, "codeforces.com/contests").unwrap_err();
        assert!(matches!(err, ExtractError::MissingUsername { .. }));
    }

    #[test]
    fn linkedin_in_path_with_query_string() {
        let name = extract_username(
            Platform::Linkedin,
            "https://www.linkedin.com/in/alice-smith?trk=nav",
        )
        .unwrap();
        assert_eq!(name, "alice-smith");
    }

    #[test]
    fn twitter_accepts_x_dot_com() {
        let name = extract_username(Platform::Twitter, "https://x.com/alice_dev").unwrap();
        assert_eq!(name, "alice_dev");
    }

    #[test]
    fn bare_handle_is_accepted() {
        let name = extract_username(Platform::Spoj, "alice42").unwrap();
        assert_eq!(name, "alice42");
    }

    #[test]
    fn host_comparison_ignores_case_and_www() {
        let name = extract_username(Platform::Instagram, "WWW.Instagram.COM/alice.pics/").unwrap();
        assert_eq!(name, "alice.pics");
    }

    #[test]
    fn username_case_is_preserved() {
        let name = extract_username(Platform::Github, "github.com/AliceDev").unwrap();
        assert_eq!(name, "AliceDev");
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = extract_username(Platform::Github, "   ").unwrap_err();
        assert_eq!(err, ExtractError::EmptyInput);
    }

    #[test]
    fn wrong_domain_is_rejected() {
        let err = extract_username(Platform::Github, "https://gitlab.com/alice").unwrap_err();
        assert!(
            matches!(err, ExtractError::DomainMismatch { ref host, .. } if host == "gitlab.com")
        );
    }

    #[test]
    fn domain_without_path_is_missing_username() {
        let err = extract_username(Platform::Github, "https://github.com/").unwrap_err();
        assert!(matches!(err, ExtractError::MissingUsername { .. }));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        let err = extract_username(Platform::Github, "github.com/ali ce").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUsername { .. }));
    }

    #[test]
    fn extraction_is_deterministic() {
        let first = extract_username(Platform::Atcoder, "https://atcoder.jp/users/chokudai");
        let second = extract_username(Platform::Atcoder, "https://atcoder.jp/users/chokudai");
        assert_eq!(first, second);
        assert_eq!(first.unwrap(), "chokudai");
    }
}
