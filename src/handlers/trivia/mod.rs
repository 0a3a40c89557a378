// handlers/trivia - quiz API: categories, paginated questions, search and quiz play
//
// All routes are public.

use std::collections::BTreeMap;

use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;

use crate::database::models::Category;
use crate::database::repository::CategoryRepo;
use crate::state::AppState;

pub mod category;
pub mod question;
pub mod quiz;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list_categories))
        .route("/categories/:id/questions", get(category::questions_in_category))
        .route(
            "/questions",
            get(question::list_questions).post(question::create_or_search),
        )
        .route("/questions/search", post(question::search_questions))
        .route("/questions/:id", delete(question::delete_question))
        .route("/quizzes", post(quiz::next_question))
}

/// `{ "<id>": "<type>" }`, the shape the trivia frontend indexes into
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

pub(crate) async fn load_categories(pool: &PgPool) -> Result<CategoryMap, sqlx::Error> {
    Ok(category_map(CategoryRepo::list(pool).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_keys_serialize_as_strings() {
        let map = category_map(vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ]);
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value, serde_json::json!({ "1": "Science", "2": "Art" }));
    }
}
