use crate::models::{AttractionId, Booking};
use std::collections::{HashMap, HashSet};

/// What a user's booking history says about their taste
///
/// Built from the denormalized tags and locations carried on each booking.
#[derive(Debug, Clone, Default)]
pub struct TasteProfile {
    /// Distinct tags, most frequently booked first (ties alphabetical)
    pub ranked_tags: Vec<String>,
    pub tags: HashSet<String>,
    pub locations: HashSet<String>,
    pub booked_ids: HashSet<AttractionId>,
}

impl TasteProfile {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let mut tag_counts: HashMap<&str, usize> = HashMap::new();
        let mut locations = HashSet::new();
        let mut booked_ids = HashSet::with_capacity(bookings.len());

        for booking in bookings {
            for tag in &booking.tags {
                *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
            }
            locations.insert(booking.loc.clone());
            booked_ids.insert(booking.attraction_id);
        }

        let mut counted: Vec<(&str, usize)> = tag_counts.into_iter().collect();
        counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let ranked_tags: Vec<String> = counted.into_iter().map(|(tag, _)| tag.to_string()).collect();
        let tags = ranked_tags.iter().cloned().collect();

        Self {
            ranked_tags,
            tags,
            locations,
            booked_ids,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.booked_ids.is_empty()
    }

    #[inline]
    pub fn has_booked(&self, id: AttractionId) -> bool {
        self.booked_ids.contains(&id)
    }
}
