// handlers/venues/artist.rs - /artists handlers

use axum::extract::{Path, State};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::SearchBody;
use crate::database::models::artist::{Artist, ArtistInput, ArtistPatch};
use crate::database::models::show::{partition_shows, ArtistShow};
use crate::database::repository::ArtistRepo;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Value> {
    let artists = ArtistRepo::list_summaries(&state.pool).await?;
    Ok(ApiResponse::success(json!({ "artists": artists })))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchBody>,
) -> ApiResult<Value> {
    let data = ArtistRepo::search(&state.pool, &body.search_term).await?;
    Ok(ApiResponse::success(json!({ "count": data.len(), "data": data })))
}

/// GET /artists/:id
pub async fn show_artist(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;

    let shows = ArtistRepo::shows(&state.pool, id).await?;
    let (past_shows, upcoming_shows) = partition_shows(shows, Utc::now());

    let detail = ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    };
    Ok(ApiResponse::success(json!({ "artist": detail })))
}

/// POST /artists
pub async fn create_artist(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ArtistInput>,
) -> ApiResult<Value> {
    input.validate()?;

    let artist = ArtistRepo::create(&state.pool, &input).await?;
    info!(artist_id = artist.id, name = %artist.name, "Artist listed");

    Ok(ApiResponse::created(json!({ "artist": artist })))
}

/// PATCH /artists/:id
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<ArtistPatch>,
) -> ApiResult<Value> {
    let current = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;

    let input = patch.apply(current);
    input.validate()?;

    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;

    Ok(ApiResponse::success(json!({ "artist": artist })))
}

/// DELETE /artists/:id
pub async fn delete_artist(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    if !ArtistRepo::delete(&state.pool, id).await? {
        return Err(ApiError::resource_not_found());
    }
    info!(artist_id = id, "Artist deleted");

    Ok(ApiResponse::success(json!({ "deleted": id })))
}
