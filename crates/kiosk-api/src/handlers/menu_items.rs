use axum::{extract::rejection::JsonRejection, extract::State, Json};

use kiosk_core::domain::MenuItem;

use crate::{dto::UpdateMenuItemRequest, error::ApiError, state::AppState};

/// GET /api/admin/menu-items, inactive rows included
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.catalog.list_menu_items(true).await?))
}

/// PATCH /api/admin/menu-items
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateMenuItemRequest>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Json(request) = payload?;
    let (id, update) = request.into_parts()?;
    Ok(Json(state.catalog.update_menu_item(id, update).await?))
}
