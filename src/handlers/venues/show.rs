// handlers/venues/show.rs - /shows handlers

use axum::extract::State;
use serde_json::{json, Value};
use tracing::info;

use crate::database::models::show::ShowInput;
use crate::database::repository::ShowRepo;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::state::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Value> {
    let shows = ShowRepo::list(&state.pool).await?;
    Ok(ApiResponse::success(json!({ "shows": shows })))
}

/// POST /shows - unknown artist or venue ids come back as 422
pub async fn create_show(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ShowInput>,
) -> ApiResult<Value> {
    let new_show = input.validate()?;

    let show = ShowRepo::create(&state.pool, &new_show).await?;
    info!(show_id = show.id, artist_id = show.artist_id, venue_id = show.venue_id, "Show listed");

    Ok(ApiResponse::created(json!({ "show": show })))
}
