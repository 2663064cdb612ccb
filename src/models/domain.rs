use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

pub type AttractionId = i64;
pub type UserId = i64;

/// Bookable attraction with its descriptive tags and location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: AttractionId,
    #[serde(default, deserialize_with = "nullable_tags")]
    pub tags: BTreeSet<String>,
    pub loc: String,
}

/// Past booking of an attraction by a user
///
/// `tags` and `loc` are copied from the attraction at booking time, so the
/// recommender never has to join back to the attraction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub user_id: UserId,
    pub attraction_id: AttractionId,
    #[serde(default, deserialize_with = "nullable_tags")]
    pub tags: BTreeSet<String>,
    pub loc: String,
}

/// Accept `"tags": null` as no tags
fn nullable_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Candidate attraction with its overlap score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAttraction {
    pub id: AttractionId,
    pub score: u32,
}

impl Attraction {
    pub fn new<I, S>(id: AttractionId, tags: I, loc: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            tags: tags.into_iter().map(Into::into).collect(),
            loc: loc.into(),
        }
    }
}

impl Booking {
    pub fn new<I, S>(
        user_id: UserId,
        attraction_id: AttractionId,
        tags: I,
        loc: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id,
            attraction_id,
            tags: tags.into_iter().map(Into::into).collect(),
            loc: loc.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attraction_ignores_unknown_fields() {
        let json = r#"{
            "id": 12,
            "slug": "kawah-putih",
            "name": "Kawah Putih",
            "loc": "Bandung",
            "tags": ["nature", "crater", "nature"],
            "price": 25000,
            "created_at": "2025-06-26T11:59:44.000000Z"
        }"#;

        let attraction: Attraction = serde_json::from_str(json).unwrap();

        assert_eq!(attraction.id, 12);
        assert_eq!(attraction.loc, "Bandung");
        assert_eq!(attraction.tags.len(), 2);
        assert!(attraction.tags.contains("crater"));
    }

    #[test]
    fn test_null_tags_load_as_empty() {
        let attraction: Attraction =
            serde_json::from_str(r#"{"id": 3, "tags": null, "loc": "Bogor"}"#).unwrap();
        let booking: Booking = serde_json::from_str(
            r#"{"user_id": 1, "attraction_id": 3, "tags": null, "loc": "Bogor"}"#,
        )
        .unwrap();
        let missing: Attraction = serde_json::from_str(r#"{"id": 4, "loc": "Bogor"}"#).unwrap();

        assert!(attraction.tags.is_empty());
        assert!(booking.tags.is_empty());
        assert!(missing.tags.is_empty());
    }

    #[test]
    fn test_booking_requires_loc() {
        let json = r#"{"user_id": 1, "attraction_id": 2, "tags": ["museum"]}"#;

        assert!(serde_json::from_str::<Booking>(json).is_err());
    }

    #[test]
    fn test_booking_rejects_string_ids() {
        let json = r#"{"user_id": "one", "attraction_id": 2, "tags": [], "loc": "A"}"#;

        assert!(serde_json::from_str::<Booking>(json).is_err());
    }
}
