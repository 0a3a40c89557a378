use sqlx::{PgExecutor, PgPool};

use super::like_pattern;
use crate::database::models::question::{NewQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct QuestionRepo;

impl QuestionRepo {
    pub async fn count<'e>(executor: impl PgExecutor<'e>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(executor)
            .await
    }

    /// One page of questions ordered by id
    pub async fn page(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn by_category(pool: &PgPool, category: i32) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
    }

    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &NewQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(executor)
            .await
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A random question not in `exclude`, optionally limited to one category
    pub async fn random_excluding(
        pool: &PgPool,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE ($1::INTEGER IS NULL OR category = $1) AND NOT (id = ANY($2)) \
             ORDER BY random() LIMIT 1"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .bind(exclude)
            .fetch_optional(pool)
            .await
    }
}
