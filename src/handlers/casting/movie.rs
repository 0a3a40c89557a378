use axum::extract::{Path, State};
use serde_json::{json, Value};
use tracing::info;

use crate::auth::permissions::{DeleteMovies, GetMovies, PatchMovies, PostMovies};
use crate::database::models::movie::{MovieInput, MoviePatch};
use crate::database::repository::MovieRepo;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Authorized, JsonBody};
use crate::state::AppState;

pub async fn list_movies(
    _auth: Authorized<GetMovies>,
    State(state): State<AppState>,
) -> ApiResult<Value> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(ApiResponse::success(json!({ "movies": movies })))
}

pub async fn get_movie(
    _auth: Authorized<GetMovies>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    Ok(ApiResponse::success(json!({ "movie": movie })))
}

pub async fn create_movie(
    auth: Authorized<PostMovies>,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MovieInput>,
) -> ApiResult<Value> {
    let new_movie = input.validate()?;

    let movie = MovieRepo::create(&state.pool, &new_movie).await?;
    info!(movie_id = movie.id, title = %movie.title, by = auth.subject(), "Movie created");

    Ok(ApiResponse::created(json!({ "created": movie.id, "movie": movie })))
}

pub async fn update_movie(
    auth: Authorized<PatchMovies>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<MoviePatch>,
) -> ApiResult<Value> {
    let current = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    let update = patch.apply(current).validate()?;

    let movie = MovieRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    info!(movie_id = id, by = auth.subject(), "Movie updated");

    Ok(ApiResponse::success(json!({ "movie": movie })))
}

pub async fn delete_movie(
    auth: Authorized<DeleteMovies>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(ApiError::resource_not_found());
    }
    info!(movie_id = id, by = auth.subject(), "Movie deleted");

    Ok(ApiResponse::success(json!({ "deleted": id })))
}
