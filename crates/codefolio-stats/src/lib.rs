//! Canonical statistics shapes: defaults, declarative field mappings, and
//! the normalizer that projects raw platform payloads onto them.

pub mod defaults;
pub mod mapping;
pub mod normalize;
pub mod path;

pub use defaults::{canonical_fields, default_summary, CanonicalField, DefaultValue};
pub use mapping::{mappings_for, FieldMapping};
pub use normalize::{project, summarize};
pub use path::lookup_path;

/// Flat, canonical statistics for one platform.
///
/// The key set for a given platform is fixed (see [`canonical_fields`])
/// whether the values came from a real fetch or from [`default_summary`].
pub type StatsSummary = serde_json::Map<String, serde_json::Value>;
