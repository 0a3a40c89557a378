// handlers/casting - casting agency: actors and movies, every route needs a permission

use axum::{routing::get, Router};

use crate::state::AppState;

pub mod actor;
pub mod movie;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/actors", get(actor::list_actors).post(actor::create_actor))
        .route(
            "/actors/:id",
            get(actor::get_actor)
                .patch(actor::update_actor)
                .delete(actor::delete_actor),
        )
        .route("/movies", get(movie::list_movies).post(movie::create_movie))
        .route(
            "/movies/:id",
            get(movie::get_movie)
                .patch(movie::update_movie)
                .delete(movie::delete_movie),
        )
}
