use sqlx::PgPool;

use crate::database::models::movie::{Movie, NewMovie};

pub struct MovieRepo;

impl MovieRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>("SELECT id, title, release_date FROM movies ORDER BY release_date, id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>("SELECT id, title, release_date FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, release_date) VALUES ($1, $2) RETURNING id, title, release_date",
        )
        .bind(&input.title)
        .bind(input.release_date)
        .fetch_one(pool)
        .await
    }

    pub async fn update(pool: &PgPool, id: i32, input: &NewMovie) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "UPDATE movies SET title = $2, release_date = $3 WHERE id = $1 \
             RETURNING id, title, release_date",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.release_date)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
