use crate::core::profile::TasteProfile;
use crate::models::Attraction;

/// Calculate the overlap score of an attraction against a taste profile
///
/// Scoring formula:
/// score = (
///     |attraction.tags ∩ profile.tags| +   # one point per shared tag
///     loc_score                             # one point if the location was booked before
/// )
///
/// Tag frequency is not used as a weight, only membership.
pub fn calculate_overlap_score(attraction: &Attraction, profile: &TasteProfile) -> u32 {
    calculate_tag_score(attraction, profile) + calculate_location_score(attraction, profile)
}

#[inline]
fn calculate_tag_score(attraction: &Attraction, profile: &TasteProfile) -> u32 {
    attraction
        .tags
        .iter()
        .filter(|tag| profile.tags.contains(tag.as_str()))
        .count() as u32
}

#[inline]
fn calculate_location_score(attraction: &Attraction, profile: &TasteProfile) -> u32 {
    u32::from(profile.locations.contains(&attraction.loc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Booking;

    fn create_test_profile() -> TasteProfile {
        TasteProfile::from_bookings(&[
            Booking::new(7, 1, ["hiking", "nature"], "Bandung"),
            Booking::new(7, 2, ["museum"], "Jakarta"),
        ])
    }

    #[test]
    fn test_tags_and_location_add_up() {
        let profile = create_test_profile();
        let attraction = Attraction::new(3, ["hiking", "museum", "food"], "Bandung");

        assert_eq!(calculate_overlap_score(&attraction, &profile), 3);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let profile = create_test_profile();
        let attraction = Attraction::new(4, ["beach"], "Bali");

        assert_eq!(calculate_overlap_score(&attraction, &profile), 0);
    }

    #[test]
    fn test_location_only() {
        let profile = create_test_profile();
        let attraction = Attraction::new(5, Vec::<String>::new(), "Jakarta");

        assert_eq!(calculate_tag_score(&attraction, &profile), 0);
        assert_eq!(calculate_location_score(&attraction, &profile), 1);
        assert_eq!(calculate_overlap_score(&attraction, &profile), 1);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let profile = create_test_profile();
        let attraction = Attraction::new(6, ["Hiking"], "Surabaya");

        assert_eq!(calculate_overlap_score(&attraction, &profile), 0);
    }
}
