// src/server/handlers/recipes.rs
//! Recipe CRUD handlers
//!
//! Store work runs on the blocking pool with a connection opened for the
//! request; nothing is shared between requests but the database file.

use crate::server::error::{ApiError, ApiResult};
use crate::server::SharedState;
use crate::service::{NewRecipe, RecipeChanges, RecipeDetails, RecipeService};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

/// Plain `{message}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Run one service operation against a fresh connection
async fn with_service<T, F>(state: SharedState, message: &'static str, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut RecipeService<'_>) -> crate::Result<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || {
        let mut conn = state.open_db()?;
        let mut service = RecipeService::new(&mut conn);
        op(&mut service)
    })
    .await
    .map_err(|e| ApiError::from_error(message, crate::Error::Task(e.to_string())))?;

    result.map_err(|e| ApiError::from_error(message, e))
}

fn recipe_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::not_found(rejection.body_text()))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> ApiResult<T> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        tracing::warn!("{}: {}", message, rejection.body_text());
        ApiError::processing(message, rejection.body_text())
    })
}

/// Welcome message
///
/// GET /api
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Recipe Book API!"))
}

/// List all recipes with their ingredients
///
/// GET /api/recipes
pub async fn list_recipes(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<RecipeDetails>>> {
    let recipes = with_service(state, "Failed to list recipes", |service| service.list()).await?;
    Ok(Json(recipes))
}

/// Create a recipe together with its ingredients
///
/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<SharedState>,
    payload: Result<Json<NewRecipe>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RecipeDetails>)> {
    const MESSAGE: &str = "Failed to create recipe";

    let payload = body(payload, MESSAGE)?;
    let created = with_service(state, MESSAGE, move |service| service.create(payload)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch one recipe
///
/// GET /api/recipes/:id
pub async fn get_recipe(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<RecipeDetails>> {
    let id = recipe_id(id)?;
    let recipe = with_service(state, "Failed to fetch recipe", move |service| {
        service.get(id)
    })
    .await?;
    Ok(Json(recipe))
}

/// Partially update a recipe's name and instructions
///
/// PUT /api/recipes/:id
pub async fn update_recipe(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<RecipeChanges>, JsonRejection>,
) -> ApiResult<Json<RecipeDetails>> {
    const MESSAGE: &str = "Failed to update recipe";

    let id = recipe_id(id)?;
    let changes = body(payload, MESSAGE)?;
    let updated = with_service(state, MESSAGE, move |service| {
        service.update(id, changes)
    })
    .await?;
    Ok(Json(updated))
}

/// Delete a recipe and its ingredients
///
/// DELETE /api/recipes/:id
pub async fn delete_recipe(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = recipe_id(id)?;
    with_service(state, "Failed to delete recipe", move |service| {
        service.delete(id)
    })
    .await?;
    Ok(Json(MessageResponse::new("Recipe deleted successfully")))
}
