//! # Presentation Configuration
//!
//! Strongly typed configuration tree for a presentation and the deep merge
//! used to apply user overrides on top of the defaults.
//!
//! Every section is declared once (see `config_section!`) and comes with a
//! `Partial*` twin in which every field is optional. Merging walks the declared
//! schema: scalar and list fields are replaced by the override, nested sections
//! recurse, string maps merge key by key. An explicit `null` clears an optional
//! field. Keys the schema does not know about are kept in the `extra` map of
//! the section they appear in, at any depth, and merged by [`merge_json`].
//!
//! ```no_run
//! use engine::config::{Merge, PartialPresentationConfig, PresentationConfig};
//!
//! let overrides: PartialPresentationConfig =
//!     serde_json::from_str(r#"{ "reveal": { "transition": "fade" } }"#)?;
//! let config = PresentationConfig::default().merge(&overrides);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod loader;
pub mod presentation;
pub mod sections;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub use loader::ConfigFormat;
pub use presentation::{PartialPresentationConfig, PresentationConfig};
pub use sections::*;

/// Applies a partial override to a complete value, producing a new value.
///
/// Implementations must be pure: neither `self` nor `partial` is modified, and
/// applying the same override twice yields the same result as applying it once.
pub trait Merge: Sized {
    type Partial;

    fn merge(&self, partial: &Self::Partial) -> Self;
}

/// Reads a present field into `Some`, so that `null` becomes `Some(None)`.
/// Absent fields fall back to the container default, `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deep merge of two JSON values.
///
/// Objects on both sides merge key by key; anything else (arrays included) is
/// replaced by the override.
pub fn merge_json(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            Value::Object(merge_json_maps(base, overrides))
        }
        (_, overrides) => overrides.clone(),
    }
}

/// Key-wise [`merge_json`] over two JSON objects.
pub fn merge_json_maps(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        let next = match merged.get(key) {
            Some(existing) => merge_json(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_json_recurses_into_objects() {
        let base = json!({ "a": { "b": 1, "c": 2 }, "d": 3 });
        let overrides = json!({ "a": { "c": 20 } });

        assert_eq!(
            merge_json(&base, &overrides),
            json!({ "a": { "b": 1, "c": 20 }, "d": 3 })
        );
    }

    #[test]
    fn test_merge_json_replaces_arrays() {
        let base = json!({ "list": [1, 2, 3] });
        let overrides = json!({ "list": [9] });

        assert_eq!(merge_json(&base, &overrides), json!({ "list": [9] }));
    }

    #[test]
    fn test_merge_json_object_over_scalar_replaces() {
        let base = json!({ "plugin": false });
        let overrides = json!({ "plugin": { "enabled": true } });

        assert_eq!(
            merge_json(&base, &overrides),
            json!({ "plugin": { "enabled": true } })
        );
    }
}
