use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Durable record of one completed quiz attempt. Never updated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TestResult {
    pub id: i32,
    pub user_id: String,
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub score: i32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestResult {
    pub user_id: String,
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub score: i32,
}
