//! Shared data structures for the application state
//!
//! These structs represent the three datasets that flow between
//! the loader and the UI layer. All normalization of loose JSON
//! shapes (numeric vs. string ids, bare vs. object ratings) happens
//! here at deserialize time, so the rest of the app works with
//! plain strings and floats.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// A thematic grouping communities can belong to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
}

/// A free-form label communities can carry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
}

/// One external presence of a community (a chat, a forum, a social network)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Platform {
    /// Link to the community on this platform
    #[serde(default)]
    pub url: String,
    /// Member count on this platform
    #[serde(default)]
    pub members: u64,
}

/// A single catalogued community
///
/// `categories` and `tags` hold raw ids; they may reference ids that are
/// absent from the loaded datasets, in which case the UI falls back to
/// showing the raw id instead of a name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Community {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Creation date as found in the dataset (e.g. "2021-03-14")
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Normalized rating. Source data supplies either a bare number or an
    /// object carrying an `average` field; both collapse to one f64 here.
    /// Missing or malformed ratings become 0.0.
    #[serde(default, deserialize_with = "de_rating")]
    pub rating: f64,
    /// Keyed by platform name. BTreeMap keeps the render order stable.
    #[serde(default)]
    pub platforms: BTreeMap<String, Platform>,
}

impl Community {
    /// Total members across all platforms (0 when there are none).
    /// Recomputed on demand, never stored.
    pub fn members_count(&self) -> u64 {
        self.platforms.values().map(|p| p.members).sum()
    }
}

/// Accept both numeric and string ids and normalize to String
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// Normalize the two accepted rating shapes into a single f64
///
/// - `4.5` → 4.5
/// - `{"average": 4.5, ...}` → 4.5
/// - missing / null / anything else → 0.0
fn de_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Summary { average: f64 },
        Value(f64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Rating>::deserialize(deserializer)? {
        Some(Rating::Summary { average }) => average,
        Some(Rating::Value(value)) => value,
        Some(Rating::Other(_)) | None => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn community(json: &str) -> Community {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_rating_object_form() {
        let c = community(r#"{"id": "c1", "name": "A", "rating": {"average": 4.7, "count": 12}}"#);
        assert_eq!(c.rating, 4.7);
    }

    #[test]
    fn test_rating_bare_number() {
        let c = community(r#"{"id": "c1", "name": "A", "rating": 4}"#);
        assert_eq!(c.rating, 4.0);
    }

    #[test]
    fn test_rating_zero() {
        let c = community(r#"{"id": "c1", "name": "A", "rating": 0}"#);
        assert_eq!(c.rating, 0.0);
    }

    #[test]
    fn test_rating_missing_defaults_to_zero() {
        let c = community(r#"{"id": "c1", "name": "A"}"#);
        assert_eq!(c.rating, 0.0);
    }

    #[test]
    fn test_rating_malformed_defaults_to_zero() {
        let c = community(r#"{"id": "c1", "name": "A", "rating": "five stars"}"#);
        assert_eq!(c.rating, 0.0);
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let c = community(r#"{"id": 42, "name": "A"}"#);
        assert_eq!(c.id, "42");

        let cat: Category = serde_json::from_str(r#"{"id": 7, "name": "Games"}"#).unwrap();
        assert_eq!(cat.id, "7");
    }

    #[test]
    fn test_members_count_sums_platforms() {
        let c = community(
            r#"{
                "id": "c1", "name": "A",
                "platforms": {
                    "a": {"url": "https://a.example", "members": 3},
                    "b": {"url": "https://b.example", "members": 7}
                }
            }"#,
        );
        assert_eq!(c.members_count(), 10);
    }

    #[test]
    fn test_members_count_empty_and_missing_platforms() {
        let empty = community(r#"{"id": "c1", "name": "A", "platforms": {}}"#);
        assert_eq!(empty.members_count(), 0);

        let missing = community(r#"{"id": "c2", "name": "B"}"#);
        assert_eq!(missing.members_count(), 0);
    }

    #[test]
    fn test_platform_defaults() {
        let c = community(r#"{"id": "c1", "name": "A", "platforms": {"x": {}}}"#);
        let platform = &c.platforms["x"];
        assert_eq!(platform.url, "");
        assert_eq!(platform.members, 0);
    }
}
