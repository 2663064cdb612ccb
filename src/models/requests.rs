use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::UserId;

/// Query string of `GET /recommend`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendQuery {
    pub user_id: UserId,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub top_n: Option<i64>,
}

impl RecommendQuery {
    /// Requested result count, falling back to the configured default
    pub fn top_n_or(&self, default_top_n: usize) -> i64 {
        self.top_n
            .unwrap_or_else(|| i64::try_from(default_top_n).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_defaults() {
        let query = RecommendQuery { user_id: 7, top_n: None };

        assert!(query.validate().is_ok());
        assert_eq!(query.top_n_or(4), 4);
    }

    #[test]
    fn test_negative_top_n_rejected() {
        let query = RecommendQuery { user_id: 7, top_n: Some(-1) };

        assert!(query.validate().is_err());
    }

    #[test]
    fn test_zero_top_n_allowed() {
        let query = RecommendQuery { user_id: 7, top_n: Some(0) };

        assert!(query.validate().is_ok());
        assert_eq!(query.top_n_or(4), 0);
    }
}
