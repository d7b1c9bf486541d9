//! Base URLs for every upstream data source.

use codefolio_core::Platform;

/// Per-platform base URLs.
///
/// Production defaults point at the real upstreams; tests point every
/// platform at a wiremock server via [`Endpoints::all_to`] or by overriding
/// individual fields.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub leetcode: String,
    pub codeforces: String,
    pub codechef: String,
    pub atcoder: String,
    pub spoj: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            leetcode: "https://leetcode.com".to_string(),
            codeforces: "https://codeforces.com".to_string(),
            codechef: "https://codechef-api.vercel.app".to_string(),
            atcoder: "https://atcoder.jp".to_string(),
            spoj: "https://www.spoj.com".to_string(),
            github: "https://api.github.com".to_string(),
            linkedin: "https://api.linkedin.com".to_string(),
            twitter: "https://api.twitter.com".to_string(),
            facebook: "https://graph.facebook.com".to_string(),
            instagram: "https://www.instagram.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every platform at the same base URL (wiremock in tests).
    #[must_use]
    pub fn all_to(base: &str) -> Self {
        Self {
            leetcode: base.to_string(),
            codeforces: base.to_string(),
            codechef: base.to_string(),
            atcoder: base.to_string(),
            spoj: base.to_string(),
            github: base.to_string(),
            linkedin: base.to_string(),
            twitter: base.to_string(),
            facebook: base.to_string(),
            instagram: base.to_string(),
        }
    }

    #[must_use]
    pub fn base_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Leetcode => &self.leetcode,
            Platform::Codeforces => &self.codeforces,
            Platform::Codechef => &self.codechef,
            Platform::Atcoder => &self.atcoder,
            Platform::Spoj => &self.spoj,
            Platform::Github => &self.github,
            Platform::Linkedin => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::Facebook => &self.facebook,
            Platform::Instagram => &self.instagram,
        }
    }
}
