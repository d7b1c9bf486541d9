//! Dotted-path lookup into an opaque JSON tree.

use serde_json::Value;

/// Resolve a dotted path like `"profile.followers"` or
/// `"submitStats.acSubmissionNum.0.count"` against a JSON tree.
///
/// Each segment descends into an object by key, or into an array when the
/// segment parses as an index. Returns `None` as soon as a segment is absent
/// or the current node is not a traversable container; absence is the
/// normal case for sparse payloads, never an error.
#[must_use]
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_top_level_key() {
        let tree = json!({"followers": 42});
        assert_eq!(lookup_path(&tree, "followers"), Some(&json!(42)));
    }

    #[test]
    fn resolves_nested_objects() {
        let tree = json!({"profile": {"stats": {"followers": 7}}});
        assert_eq!(lookup_path(&tree, "profile.stats.followers"), Some(&json!(7)));
    }

    #[test]
    fn resolves_array_indices() {
        let tree = json!({"items": [{"count": 10}, {"count": 20}]});
        assert_eq!(lookup_path(&tree, "items.1.count"), Some(&json!(20)));
    }

    #[test]
    fn missing_key_is_none() {
        let tree = json!({"profile": {}});
        assert_eq!(lookup_path(&tree, "profile.followers"), None);
    }

    #[test]
    fn scalar_mid_path_is_none() {
        let tree = json!({"profile": "oops"});
        assert_eq!(lookup_path(&tree, "profile.followers"), None);
    }

    #[test]
    fn out_of_bounds_index_is_none() {
        let tree = json!({"items": [1, 2]});
        assert_eq!(lookup_path(&tree, "items.5"), None);
    }

    #[test]
    fn non_numeric_segment_on_array_is_none() {
        let tree = json!({"items": [1, 2]});
        assert_eq!(lookup_path(&tree, "items.first"), None);
    }
}
