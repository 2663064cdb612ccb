use crate::core::{profile::TasteProfile, scoring::calculate_overlap_score};
use crate::models::{AttractionId, ScoredAttraction, UserId};
use crate::services::DatasetStore;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;

/// Default number of recommendations when the caller gives none
pub const DEFAULT_TOP_N: usize = 4;

/// Errors returned by the recommender
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// The user has no bookings; ids were sampled at random
    ColdStart(Vec<AttractionId>),
    /// Unbooked attractions ranked by overlap with the booking history
    Personalized(Vec<ScoredAttraction>),
}

impl Recommendation {
    pub fn into_ids(self) -> Vec<AttractionId> {
        match self {
            Recommendation::ColdStart(ids) => ids,
            Recommendation::Personalized(scored) => scored.into_iter().map(|s| s.id).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Recommendation::ColdStart(ids) => ids.len(),
            Recommendation::Personalized(scored) => scored.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_cold_start(&self) -> bool {
        matches!(self, Recommendation::ColdStart(_))
    }
}

/// Recommends attractions from a user's booking history
///
/// # Pipeline Stages
/// 1. Fetch the user's bookings (cold start when there are none)
/// 2. Build the taste profile (tags, locations, booked ids)
/// 3. Drop attractions the user already booked
/// 4. Score by tag and location overlap, rank, truncate
#[derive(Debug, Clone)]
pub struct Recommender {
    store: Arc<DatasetStore>,
}

impl Recommender {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Recommend up to `top_n` attraction ids for a user
    ///
    /// Cold-start sampling draws from the thread-local RNG, so users without
    /// bookings may get a different answer on every call.
    pub fn recommend(&self, user_id: UserId, top_n: i64) -> Result<Vec<AttractionId>, RecommendError> {
        self.recommend_with_rng(user_id, top_n, &mut rand::thread_rng())
    }

    /// Same as [`Recommender::recommend`] with a caller-provided random source
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        user_id: UserId,
        top_n: i64,
        rng: &mut R,
    ) -> Result<Vec<AttractionId>, RecommendError> {
        Ok(self.rank_with_rng(user_id, top_n, rng)?.into_ids())
    }

    /// Rank attractions for a user, keeping the scores of personalized results
    pub fn rank(&self, user_id: UserId, top_n: i64) -> Result<Recommendation, RecommendError> {
        self.rank_with_rng(user_id, top_n, &mut rand::thread_rng())
    }

    pub fn rank_with_rng<R: Rng + ?Sized>(
        &self,
        user_id: UserId,
        top_n: i64,
        rng: &mut R,
    ) -> Result<Recommendation, RecommendError> {
        let limit = usize::try_from(top_n).map_err(|_| {
            RecommendError::InvalidArgument(format!("top_n must be non-negative, got {}", top_n))
        })?;

        let bookings = self.store.bookings_for_user(user_id);

        if bookings.is_empty() {
            return Ok(Recommendation::ColdStart(self.sample_random(limit, rng)));
        }

        let profile = TasteProfile::from_bookings(bookings);

        Ok(Recommendation::Personalized(self.score_candidates(&profile, limit)))
    }

    /// Pick `limit` distinct attractions uniformly at random, in random order
    fn sample_random<R: Rng + ?Sized>(&self, limit: usize, rng: &mut R) -> Vec<AttractionId> {
        let mut ids: Vec<AttractionId> = self
            .store
            .all_attractions()
            .iter()
            .map(|a| a.id)
            .collect();

        let amount = limit.min(ids.len());
        let (chosen, _) = ids.partial_shuffle(rng, amount);

        chosen.to_vec()
    }

    fn score_candidates(&self, profile: &TasteProfile, limit: usize) -> Vec<ScoredAttraction> {
        let mut scored: Vec<ScoredAttraction> = self
            .store
            .all_attractions()
            .iter()
            .filter(|attraction| !profile.has_booked(attraction.id))
            .map(|attraction| ScoredAttraction {
                id: attraction.id,
                score: calculate_overlap_score(attraction, profile),
            })
            .collect();

        // Sort by score (descending) and then by id (ascending)
        scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));

        scored.truncate(limit);
        scored
    }
}
