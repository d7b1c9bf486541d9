//! Declarative (source path → target field) mapping tables, one per platform.
//!
//! The tables are plain data, not code: adding a field to a platform means
//! adding one row here (and one row to the canonical field set), no new
//! traversal logic.

use codefolio_core::Platform;

/// One projection rule: the dotted path in the raw payload feeding a
/// canonical summary field.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub source: &'static str,
    pub target: &'static str,
}

const fn map(source: &'static str, target: &'static str) -> FieldMapping {
    FieldMapping { source, target }
}

const LEETCODE_MAPPINGS: &[FieldMapping] = &[
    map("matchedUser.submitStats.acSubmissionNum.0.count", "total_solved"),
    map("matchedUser.submitStats.acSubmissionNum.1.count", "easy_solved"),
    map("matchedUser.submitStats.acSubmissionNum.2.count", "medium_solved"),
    map("matchedUser.submitStats.acSubmissionNum.3.count", "hard_solved"),
    map("matchedUser.profile.ranking", "ranking"),
];

const CODEFORCES_MAPPINGS: &[FieldMapping] = &[
    map("rating", "rating"),
    map("maxRating", "max_rating"),
    map("rank", "rank"),
    map("contribution", "contribution"),
];

const CODECHEF_MAPPINGS: &[FieldMapping] = &[
    map("currentRating", "rating"),
    map("highestRating", "highest_rating"),
    map("stars", "stars"),
    map("globalRank", "global_rank"),
    map("countryRank", "country_rank"),
];

const ATCODER_MAPPINGS: &[FieldMapping] = &[
    map("rating", "rating"),
    map("highestRating", "highest_rating"),
    map("rank", "rank"),
    map("competitions", "competitions"),
];

const SPOJ_MAPPINGS: &[FieldMapping] =
    &[map("solved", "solved_count"), map("rank", "rank")];

const GITHUB_MAPPINGS: &[FieldMapping] = &[
    map("followers", "followers"),
    map("following", "following"),
    map("public_repos", "public_repos"),
    map("public_gists", "public_gists"),
];

const LINKEDIN_MAPPINGS: &[FieldMapping] = &[
    map("profile.followers", "followers"),
    map("profile.connections", "connections"),
];

const TWITTER_MAPPINGS: &[FieldMapping] = &[
    map("data.public_metrics.followers_count", "followers"),
    map("data.public_metrics.following_count", "following"),
    map("data.public_metrics.tweet_count", "tweets"),
];

const FACEBOOK_MAPPINGS: &[FieldMapping] = &[
    map("followers_count", "followers"),
    map("fan_count", "likes"),
];

const INSTAGRAM_MAPPINGS: &[FieldMapping] = &[
    map("graphql.user.edge_followed_by.count", "followers"),
    map("graphql.user.edge_follow.count", "following"),
    map("graphql.user.edge_owner_to_timeline_media.count", "posts"),
];

/// The mapping table for a platform's raw payload shape.
///
/// Paths match what the platform's fetch adapter returns: the leetcode
/// adapter hands over the GraphQL `data` object, codeforces unwraps its
/// envelope first, the rest pass bodies through.
#[must_use]
pub const fn mappings_for(platform: Platform) -> &'static [FieldMapping] {
    match platform {
        Platform::Leetcode => LEETCODE_MAPPINGS,
        Platform::Codeforces => CODEFORCES_MAPPINGS,
        Platform::Codechef => CODECHEF_MAPPINGS,
        Platform::Atcoder => ATCODER_MAPPINGS,
        Platform::Spoj => SPOJ_MAPPINGS,
        Platform::Github => GITHUB_MAPPINGS,
        Platform::Linkedin => LINKEDIN_MAPPINGS,
        Platform::Twitter => TWITTER_MAPPINGS,
        Platform::Facebook => FACEBOOK_MAPPINGS,
        Platform::Instagram => INSTAGRAM_MAPPINGS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::canonical_fields;

    #[test]
    fn every_mapping_target_is_a_canonical_field() {
        for platform in Platform::ALL {
            let canonical: Vec<&str> =
                canonical_fields(platform).iter().map(|f| f.name).collect();
            for mapping in mappings_for(platform) {
                assert!(
                    canonical.contains(&mapping.target),
                    "{platform}: mapping targets unknown field {}",
                    mapping.target
                );
            }
        }
    }

    #[test]
    fn every_canonical_field_has_a_mapping() {
        for platform in Platform::ALL {
            let targets: Vec<&str> =
                mappings_for(platform).iter().map(|m| m.target).collect();
            for field in canonical_fields(platform) {
                assert!(
                    targets.contains(&field.name),
                    "{platform}: field {} has no mapping",
                    field.name
                );
            }
        }
    }

    #[test]
    fn mapping_targets_are_unique_per_platform() {
        for platform in Platform::ALL {
            let mut seen = std::collections::HashSet::new();
            for mapping in mappings_for(platform) {
                assert!(
                    seen.insert(mapping.target),
                    "{platform}: duplicate target {}",
                    mapping.target
                );
            }
        }
    }
}
