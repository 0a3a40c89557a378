use axum::extract::{Path, State};
use serde_json::{json, Value};
use tracing::info;

use crate::auth::permissions::{DeleteActors, GetActors, PatchActors, PostActors};
use crate::database::models::actor::{ActorInput, ActorPatch};
use crate::database::repository::ActorRepo;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Authorized, JsonBody};
use crate::state::AppState;

pub async fn list_actors(
    _auth: Authorized<GetActors>,
    State(state): State<AppState>,
) -> ApiResult<Value> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(ApiResponse::success(json!({ "actors": actors })))
}

pub async fn get_actor(
    _auth: Authorized<GetActors>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    Ok(ApiResponse::success(json!({ "actor": actor })))
}

pub async fn create_actor(
    auth: Authorized<PostActors>,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ActorInput>,
) -> ApiResult<Value> {
    let new_actor = input.validate()?;

    let actor = ActorRepo::create(&state.pool, &new_actor).await?;
    info!(actor_id = actor.id, by = auth.subject(), "Actor created");

    Ok(ApiResponse::created(json!({ "created": actor.id, "actor": actor })))
}

pub async fn update_actor(
    auth: Authorized<PatchActors>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<ActorPatch>,
) -> ApiResult<Value> {
    let current = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    let update = patch.apply(current).validate()?;

    let actor = ActorRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    info!(actor_id = id, by = auth.subject(), "Actor updated");

    Ok(ApiResponse::success(json!({ "actor": actor })))
}

pub async fn delete_actor(
    auth: Authorized<DeleteActors>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(ApiError::resource_not_found());
    }
    info!(actor_id = id, by = auth.subject(), "Actor deleted");

    Ok(ApiResponse::success(json!({ "deleted": id })))
}
