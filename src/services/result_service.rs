use std::future::Future;

use crate::dto::result_dto::ResultListQuery;
use crate::error::{Error, Result};
use crate::models::test_result::{NewTestResult, TestResult};
use crate::utils::time::{start_of_day, start_of_next_day};
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Where completed quiz attempts are recorded.
pub trait ResultStore: Clone + Send + Sync + 'static {
    fn insert(&self, result: NewTestResult) -> impl Future<Output = Result<TestResult>> + Send;
}

#[derive(Clone)]
pub struct TestResultService {
    pool: PgPool,
}

impl TestResultService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, result: NewTestResult) -> Result<TestResult> {
        let row = sqlx::query_as::<_, TestResult>(
            r#"
            INSERT INTO test_results (user_id, q1, q2, q3, score)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, q1, q2, q3, score, timestamp
            "#,
        )
        .bind(&result.user_id)
        .bind(&result.q1)
        .bind(&result.q2)
        .bind(&result.q3)
        .bind(result.score)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list(&self, query: &ResultListQuery) -> Result<Vec<TestResult>> {
        let mut qb = build_list_query(query);
        let rows = qb
            .build_query_as::<TestResult>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TestResult> {
        sqlx::query_as::<_, TestResult>(
            r#"
            SELECT id, user_id, q1, q2, q3, score, timestamp
            FROM test_results
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Result not found".to_string()))
    }
}

impl ResultStore for TestResultService {
    async fn insert(&self, result: NewTestResult) -> Result<TestResult> {
        self.create(result).await
    }
}

fn build_list_query(query: &ResultListQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT id, user_id, q1, q2, q3, score, timestamp FROM test_results WHERE TRUE",
    );

    if let Some(min) = query.min_score {
        qb.push(" AND score >= ").push_bind(min);
    }
    if let Some(max) = query.max_score {
        qb.push(" AND score <= ").push_bind(max);
    }
    if let Some(start) = query.start_date {
        qb.push(" AND timestamp >= ").push_bind(start_of_day(start));
    }
    if let Some(end) = query.end_date {
        qb.push(" AND timestamp < ").push_bind(start_of_next_day(end));
    }

    // Column and direction come from closed enums, never from raw input.
    let direction = query.order().keyword();
    qb.push(format!(
        " ORDER BY {} {}, id {}",
        query.sort_by().column(),
        direction,
        direction
    ));
    qb.push(" LIMIT ").push_bind(query.limit());
    qb.push(" OFFSET ").push_bind(query.offset());
    qb
}
