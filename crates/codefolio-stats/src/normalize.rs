//! Projection of raw platform payloads onto canonical summaries.

use codefolio_core::{Platform, RawPayload};

use crate::defaults::default_summary;
use crate::mapping::mappings_for;
use crate::path::lookup_path;
use crate::StatsSummary;

/// Project a raw payload through the platform's mapping table.
///
/// Fields whose source path is absent, not traversable, or resolves to JSON
/// `null` are simply omitted; the caller merges the partial result over the
/// platform default, so a rich payload and a sparse one go through the same
/// code path.
#[must_use]
pub fn project(platform: Platform, raw: &RawPayload) -> StatsSummary {
    mappings_for(platform)
        .iter()
        .filter_map(|mapping| {
            let value = lookup_path(raw, mapping.source)?;
            if value.is_null() {
                return None;
            }
            Some((mapping.target.to_string(), value.clone()))
        })
        .collect()
}

/// Normalize a raw payload into a complete canonical summary.
///
/// The projection is merged over [`default_summary`], so every canonical
/// field is present in the result; a present mapped leaf overrides only its
/// own field.
#[must_use]
pub fn summarize(platform: Platform, raw: &RawPayload) -> StatsSummary {
    let mut summary = default_summary(platform);
    for (field, value) in project(platform, raw) {
        summary.insert(field, value);
    }
    summary
}
