//! Category catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory, UpdateCategory},
};

use super::{MessageResponse, ValidatedJson};

/// List all categories
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.catalog.list_categories().await?;
    Ok(Json(categories))
}

/// Get category details by ID
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Category>> {
    let category = state.services.catalog.get_category(id).await?;
    Ok(Json(category))
}

/// Create a new category
pub async fn create_category(
    State(state): State<crate::AppState>,
    ValidatedJson(category): ValidatedJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let created = state.services.catalog.create_category(category).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing category
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ValidatedJson(category): ValidatedJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let updated = state.services.catalog.update_category(id, category).await?;
    Ok(Json(updated))
}

/// Delete a category. Refused with a conflict while books still reference it.
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_category(id).await?;
    Ok(Json(MessageResponse {
        message: "Category deleted successfully".to_string(),
    }))
}
