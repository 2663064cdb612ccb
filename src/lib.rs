//! Attraction Recommender - tag and location overlap recommendations
//!
//! This library provides the recommendation logic behind the `/recommend`
//! endpoint: an immutable in-memory dataset of attractions and bookings, and a
//! recommender that ranks unbooked attractions by how much they overlap with a
//! user's booking history.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommendation, RecommendError, Recommender, TasteProfile};
pub use crate::models::{Attraction, Booking, ScoredAttraction, RecommendQuery, RecommendResponse};
pub use crate::services::{DatasetError, DatasetStore};
