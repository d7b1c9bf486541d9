//! Canonical field sets and the zero-value summary for every platform.

use codefolio_core::Platform;
use serde_json::Value;

use crate::StatsSummary;

/// Default used for a canonical field when no real value is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Numeric field; defaults to `0`.
    Zero,
    /// String field; defaults to `""`.
    Empty,
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            DefaultValue::Zero => Value::from(0),
            DefaultValue::Empty => Value::from(""),
        }
    }
}

/// One named field of a platform's canonical summary.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalField {
    pub name: &'static str,
    pub default: DefaultValue,
}

const fn zero(name: &'static str) -> CanonicalField {
    CanonicalField {
        name,
        default: DefaultValue::Zero,
    }
}

const fn empty(name: &'static str) -> CanonicalField {
    CanonicalField {
        name,
        default: DefaultValue::Empty,
    }
}

const LEETCODE_FIELDS: &[CanonicalField] = &[
    zero("total_solved"),
    zero("easy_solved"),
    zero("medium_solved"),
    zero("hard_solved"),
    zero("ranking"),
];

const CODEFORCES_FIELDS: &[CanonicalField] = &[
    zero("rating"),
    zero("max_rating"),
    empty("rank"),
    zero("contribution"),
];

const CODECHEF_FIELDS: &[CanonicalField] = &[
    zero("rating"),
    zero("highest_rating"),
    empty("stars"),
    zero("global_rank"),
    zero("country_rank"),
];

const ATCODER_FIELDS: &[CanonicalField] = &[
    zero("rating"),
    zero("highest_rating"),
    zero("rank"),
    zero("competitions"),
];

const SPOJ_FIELDS: &[CanonicalField] = &[zero("solved_count"), zero("rank")];

const GITHUB_FIELDS: &[CanonicalField] = &[
    zero("followers"),
    zero("following"),
    zero("public_repos"),
    zero("public_gists"),
];

const LINKEDIN_FIELDS: &[CanonicalField] = &[zero("followers"), zero("connections")];

const TWITTER_FIELDS: &[CanonicalField] =
    &[zero("followers"), zero("following"), zero("tweets")];

const FACEBOOK_FIELDS: &[CanonicalField] = &[zero("followers"), zero("likes")];

const INSTAGRAM_FIELDS: &[CanonicalField] =
    &[zero("followers"), zero("following"), zero("posts")];

/// The fixed field set of a platform's summary.
///
/// Every summary for `platform`, fetched or defaulted, carries exactly
/// these keys, so consumers never branch on where a value came from.
#[must_use]
pub const fn canonical_fields(platform: Platform) -> &'static [CanonicalField] {
    match platform {
        Platform::Leetcode => LEETCODE_FIELDS,
        Platform::Codeforces => CODEFORCES_FIELDS,
        Platform::Codechef => CODECHEF_FIELDS,
        Platform::Atcoder => ATCODER_FIELDS,
        Platform::Spoj => SPOJ_FIELDS,
        Platform::Github => GITHUB_FIELDS,
        Platform::Linkedin => LINKEDIN_FIELDS,
        Platform::Twitter => TWITTER_FIELDS,
        Platform::Facebook => FACEBOOK_FIELDS,
        Platform::Instagram => INSTAGRAM_FIELDS,
    }
}

/// Build the zero-value summary for a platform.
///
/// Total over [`Platform::ALL`]: every canonical field is present with its
/// default, so absence of real data is indistinguishable from zero activity
/// at this layer. Only the refresh outcome tag knows the difference.
#[must_use]
pub fn default_summary(platform: Platform) -> StatsSummary {
    canonical_fields(platform)
        .iter()
        .map(|f| (f.name.to_string(), f.default.to_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_has_a_complete_default() {
        for platform in Platform::ALL {
            let summary = default_summary(platform);
            let canonical: Vec<&str> =
                canonical_fields(platform).iter().map(|f| f.name).collect();
            assert_eq!(
                summary.len(),
                canonical.len(),
                "{platform}: default summary key count"
            );
            for name in canonical {
                assert!(
                    summary.contains_key(name),
                    "{platform}: default summary missing {name}"
                );
            }
        }
    }

    #[test]
    fn defaults_are_zero_or_empty() {
        for platform in Platform::ALL {
            for (name, value) in default_summary(platform) {
                let ok = value == Value::from(0) || value == Value::from("");
                assert!(ok, "{platform}.{name} default is {value}");
            }
        }
    }

    #[test]
    fn default_summary_is_deterministic() {
        for platform in Platform::ALL {
            assert_eq!(default_summary(platform), default_summary(platform));
        }
    }

    #[test]
    fn field_names_are_unique_per_platform() {
        for platform in Platform::ALL {
            let mut seen = std::collections::HashSet::new();
            for f in canonical_fields(platform) {
                assert!(seen.insert(f.name), "{platform}: duplicate field {}", f.name);
            }
        }
    }
}
