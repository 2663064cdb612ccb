use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::Recommender;
use crate::models::{RecommendQuery, RecommendResponse};
use crate::routes::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub default_top_n: usize,
}

/// Configure the recommendation route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommend", web::get().to(recommend));
}

/// Recommend attractions endpoint
///
/// GET /recommend?user_id={int}&top_n={int, default 4}
///
/// Response body:
/// ```json
/// { "recommendations": [3, 2] }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    query: web::Query<RecommendQuery>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return Err(errors.into());
    }

    let user_id = query.user_id;
    let top_n = query.top_n_or(state.default_top_n);

    let result = state.recommender.rank(user_id, top_n)?;

    tracing::info!(
        user_id,
        top_n,
        cold_start = result.is_cold_start(),
        "Returning {} recommendations",
        result.len()
    );

    Ok(HttpResponse::Ok().json(RecommendResponse {
        recommendations: result.into_ids(),
    }))
}
