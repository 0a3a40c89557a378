// handlers/coffee/drink.rs - /drinks handlers

use axum::extract::{Path, State};
use serde_json::{json, Value};
use tracing::info;

use crate::auth::permissions::{DeleteDrinks, GetDrinksDetail, PatchDrinks, PostDrinks};
use crate::database::models::drink::{DrinkInput, DrinkPatch};
use crate::database::repository::DrinkRepo;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Authorized, JsonBody};
use crate::state::AppState;

/// GET /drinks - short recipe form, no ingredient names
pub async fn list_drinks(State(state): State<AppState>) -> ApiResult<Value> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    let drinks: Vec<_> = drinks.iter().map(|d| d.short()).collect();

    Ok(ApiResponse::success(json!({ "drinks": drinks })))
}

/// GET /drinks-detail
pub async fn list_drinks_detail(
    _auth: Authorized<GetDrinksDetail>,
    State(state): State<AppState>,
) -> ApiResult<Value> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    let drinks: Vec<_> = drinks.iter().map(|d| d.long()).collect();

    Ok(ApiResponse::success(json!({ "drinks": drinks })))
}

/// POST /drinks
pub async fn create_drink(
    auth: Authorized<PostDrinks>,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<DrinkInput>,
) -> ApiResult<Value> {
    let (title, recipe) = input.validate()?;

    let drink = DrinkRepo::create(&state.pool, &title, &recipe).await?;
    info!(drink_id = drink.id, title = %drink.title, by = auth.subject(), "Drink created");

    Ok(ApiResponse::success(json!({ "drinks": [drink.long()] })))
}

/// PATCH /drinks/:id
pub async fn update_drink(
    auth: Authorized<PatchDrinks>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(patch): JsonBody<DrinkPatch>,
) -> ApiResult<Value> {
    let (title, recipe) = patch.validate()?;

    let drink = DrinkRepo::update(&state.pool, id, title.as_deref(), recipe.as_deref())
        .await?
        .ok_or_else(ApiError::resource_not_found)?;
    info!(drink_id = id, by = auth.subject(), "Drink updated");

    Ok(ApiResponse::success(json!({ "drinks": [drink.long()] })))
}

/// DELETE /drinks/:id
pub async fn delete_drink(
    auth: Authorized<DeleteDrinks>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    if !DrinkRepo::delete(&state.pool, id).await? {
        return Err(ApiError::resource_not_found());
    }
    info!(drink_id = id, by = auth.subject(), "Drink deleted");

    Ok(ApiResponse::success(json!({ "delete": id })))
}
