use crate::dto::question_dto::{PaginationQuery, QuestionPayload};
use crate::error::{Error, Result};
use crate::models::question::Question;
use sqlx::PgPool;

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, page: &PaginationQuery) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, text, options, correct
            FROM questions
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, text, options, correct
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(not_found)
    }

    pub async fn create(&self, payload: QuestionPayload) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (text, options, correct)
            VALUES ($1, $2, $3)
            RETURNING id, text, options, correct
            "#,
        )
        .bind(&payload.text)
        .bind(&payload.options)
        .bind(&payload.correct)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(question_id = question.id, "question created");
        Ok(question)
    }

    /// Replaces text, options and the correct answer of an existing question.
    pub async fn update(&self, id: i32, payload: QuestionPayload) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET text = $2, options = $3, correct = $4
            WHERE id = $1
            RETURNING id, text, options, correct
            "#,
        )
        .bind(id)
        .bind(&payload.text)
        .bind(&payload.options)
        .bind(&payload.correct)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(not_found)?;

        tracing::info!(question_id = id, "question updated");
        Ok(question)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(not_found());
        }
        tracing::info!(question_id = id, "question deleted");
        Ok(())
    }
}

fn not_found() -> Error {
    Error::NotFound("Question not found".to_string())
}
