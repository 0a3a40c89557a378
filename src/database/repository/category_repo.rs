use sqlx::{PgExecutor, PgPool};

use crate::database::models::Category;

pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create<'e>(executor: impl PgExecutor<'e>, kind: &str) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (type) VALUES ($1) RETURNING id, type")
            .bind(kind)
            .fetch_one(executor)
            .await
    }
}
