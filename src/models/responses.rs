use serde::{Deserialize, Serialize};
use crate::models::domain::AttractionId;

/// Response for the recommend endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<AttractionId>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
