use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::database::models::drink::{Drink, Ingredient};

#[derive(FromRow)]
struct DrinkRow {
    id: i32,
    title: String,
    recipe: Json<Vec<Ingredient>>,
}

impl From<DrinkRow> for Drink {
    fn from(row: DrinkRow) -> Self {
        Drink {
            id: row.id,
            title: row.title,
            recipe: row.recipe.0,
        }
    }
}

pub struct DrinkRepo;

impl DrinkRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drinks ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Drink::from).collect())
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM drinks")
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Drink>, sqlx::Error> {
        let row = sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drinks WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Drink::from))
    }

    pub async fn create(pool: &PgPool, title: &str, recipe: &[Ingredient]) -> Result<Drink, sqlx::Error> {
        let row = sqlx::query_as::<_, DrinkRow>(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING id, title, recipe",
        )
        .bind(title)
        .bind(Json(recipe))
        .fetch_one(pool)
        .await?;
        Ok(row.into())
    }

    /// Update whichever of title / recipe is given
    pub async fn update(
        pool: &PgPool,
        id: i32,
        title: Option<&str>,
        recipe: Option<&[Ingredient]>,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let row = sqlx::query_as::<_, DrinkRow>(
            "UPDATE drinks SET title = COALESCE($2, title), recipe = COALESCE($3, recipe) \
             WHERE id = $1 RETURNING id, title, recipe",
        )
        .bind(id)
        .bind(title)
        .bind(recipe.map(Json))
        .fetch_optional(pool)
        .await?;
        Ok(row.map(Drink::from))
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
