use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

/// Body of `POST /questions` and `PUT /questions/{id}`.
///
/// Clients may echo back a full question including `id`; it is ignored, the
/// path and the database decide identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuestionPayload {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub text: String,
    pub options: String,
    #[validate(length(min = 1))]
    pub correct: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Number of rows to skip
    #[validate(range(min = 0))]
    pub skip: Option<i64>,
    /// Maximum number of rows to return
    #[validate(range(min = 0))]
    pub limit: Option<i64>,
}

impl PaginationQuery {
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub detail: String,
}
