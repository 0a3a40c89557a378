use sqlx::PgPool;

use crate::database::models::actor::{Actor, NewActor};

pub struct ActorRepo;

impl ActorRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &NewActor) -> Result<Actor, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3) RETURNING id, name, age, gender",
        )
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.gender)
        .fetch_one(pool)
        .await
    }

    pub async fn update(pool: &PgPool, id: i32, input: &NewActor) -> Result<Option<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "UPDATE actors SET name = $2, age = $3, gender = $4 WHERE id = $1 \
             RETURNING id, name, age, gender",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.gender)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
