// handlers/venues/venue.rs - /venues handlers

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::SearchBody;
use crate::database::models::show::{partition_shows, VenueShow};
use crate::database::models::venue::{Venue, VenueInput, VenuePatch, VenueSummary};
use crate::database::repository::VenueRepo;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::state::AppState;

/// Venues sharing a city
#[derive(Debug, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group venue rows by (state, city), both ordered alphabetically
pub fn group_by_area(rows: Vec<VenueSummary>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for row in rows {
        areas
            .entry((row.state.clone(), row.city.clone()))
            .or_default()
            .push(row);
    }

    areas
        .into_iter()
        .map(|((state, city), venues)| Area { city, state, venues })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Value> {
    let rows = VenueRepo::list_summaries(&state.pool).await?;
    Ok(ApiResponse::success(json!({ "areas": group_by_area(rows) })))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchBody>,
) -> ApiResult<Value> {
    let data = VenueRepo::search(&state.pool, &body.search_term).await?;
    Ok(ApiResponse::success(json!({ "count": data.len(), "data": data })))
}

/// GET /venues/:id
pub async fn show_venue(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;

    let shows = VenueRepo::shows(&state.pool, id).await?;
    let (past_shows, upcoming_shows) = partition_shows(shows, Utc::now());

    let detail = VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    };
    Ok(ApiResponse::success(json!({ "venue": detail })))
}

/// POST /venues
pub async fn create_venue(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<VenueInput>,
) -> ApiResult<Value> {
    input.validate()?;

    let venue = VenueRepo::create(&state.pool, &input).await?;
    info!(venue_id = venue.id, name = %venue.name, "Venue listed");

    Ok(ApiResponse::created(json!({ "venue": venue })))
}

/// PATCH /venues/:id
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<VenuePatch>,
) -> ApiResult<Value> {
    let current = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;

    let input = patch.apply(current);
    input.validate()?;

    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    info!(venue_id = id, "Venue updated");

    Ok(ApiResponse::success(json!({ "venue": venue })))
}

/// DELETE /venues/:id - removes the venue and its shows
pub async fn delete_venue(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    if !VenueRepo::delete(&state.pool, id).await? {
        return Err(ApiError::resource_not_found());
    }
    info!(venue_id = id, "Venue deleted");

    Ok(ApiResponse::success(json!({ "deleted": id })))
}
