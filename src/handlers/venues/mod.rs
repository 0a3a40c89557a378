// handlers/venues - venue directory: venues, artists and the shows linking them
//
// All routes are public.

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::state::AppState;

pub mod artist;
pub mod show;
pub mod venue;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venue::list_venues).post(venue::create_venue))
        .route("/venues/search", post(venue::search_venues))
        .route(
            "/venues/:id",
            get(venue::show_venue)
                .patch(venue::update_venue)
                .delete(venue::delete_venue),
        )
        .route("/artists", get(artist::list_artists).post(artist::create_artist))
        .route("/artists/search", post(artist::search_artists))
        .route(
            "/artists/:id",
            get(artist::show_artist)
                .patch(artist::update_artist)
                .delete(artist::delete_artist),
        )
        .route("/shows", get(show::list_shows).post(show::create_show))
}

/// Body of the search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub search_term: String,
}
