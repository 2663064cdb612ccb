// Route exports
pub mod recommend;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use crate::core::RecommendError;
use crate::models::ErrorResponse;

pub use recommend::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommend::configure);
}

/// Error returned by handlers, rendered as a JSON [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: 400,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ApiError {}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error.clone(),
            message: self.message.clone(),
            status_code: self.status_code,
        })
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::InvalidArgument(message) => {
                ApiError::bad_request("invalid_argument", message)
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::bad_request("invalid_argument", errors.to_string())
    }
}

/// Handle query payload errors (missing or non-integer parameters)
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::bad_request("invalid_query", format!("Invalid query: {}", err)).into()
}
