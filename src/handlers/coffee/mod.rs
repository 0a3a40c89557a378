// handlers/coffee - coffee shop drink menu
//
// GET /drinks is public; the detail view and every write need a permission.

use axum::{
    routing::{get, patch},
    Router,
};

use crate::state::AppState;

pub mod drink;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(drink::list_drinks).post(drink::create_drink))
        .route("/drinks-detail", get(drink::list_drinks_detail))
        .route(
            "/drinks/:id",
            patch(drink::update_drink).delete(drink::delete_drink),
        )
}
