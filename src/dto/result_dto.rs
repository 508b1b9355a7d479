use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::question_dto::{DEFAULT_LIMIT, MAX_LIMIT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultSortField {
    Score,
    #[default]
    Timestamp,
}

impl ResultSortField {
    pub fn column(self) -> &'static str {
        match self {
            ResultSortField::Score => "score",
            ResultSortField::Timestamp => "timestamp",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
#[validate(schema(function = "validate_ranges"))]
pub struct ResultListQuery {
    #[validate(range(min = 0))]
    pub skip: Option<i64>,
    #[validate(range(min = 0))]
    pub limit: Option<i64>,
    /// Minimum score, inclusive
    pub min_score: Option<i32>,
    /// Maximum score, inclusive
    pub max_score: Option<i32>,
    /// First day of the range (YYYY-MM-DD), inclusive
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the range (YYYY-MM-DD), inclusive
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    #[param(inline)]
    pub sort_by: Option<ResultSortField>,
    #[param(inline)]
    pub order: Option<SortOrder>,
}

fn validate_ranges(query: &ResultListQuery) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (query.min_score, query.max_score) {
        if min > max {
            return Err(ValidationError::new("min_score_exceeds_max_score"));
        }
    }
    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Err(ValidationError::new("start_date_after_end_date"));
        }
    }
    Ok(())
}

impl ResultListQuery {
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
    }

    pub fn sort_by(&self) -> ResultSortField {
        self.sort_by.unwrap_or_default()
    }

    pub fn order(&self) -> SortOrder {
        self.order.unwrap_or_default()
    }
}
