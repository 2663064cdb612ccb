// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Attraction, AttractionId, Booking, ScoredAttraction, UserId};
pub use requests::RecommendQuery;
pub use responses::{ErrorResponse, RecommendResponse};
