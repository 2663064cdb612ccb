// Core algorithm exports
pub mod profile;
pub mod recommender;
pub mod scoring;

pub use profile::TasteProfile;
pub use recommender::{Recommendation, RecommendError, Recommender, DEFAULT_TOP_N};
pub use scoring::calculate_overlap_score;
