use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use kiosk_core::domain::Modifier;

use crate::{
    dto::{CreateModifierRequest, UpdateModifierRequest},
    error::ApiError,
    state::AppState,
};

/// GET /api/admin/modifiers, inactive rows included
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Modifier>>, ApiError> {
    Ok(Json(state.catalog.list_modifiers(true).await?))
}

/// POST /api/admin/modifiers
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateModifierRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Modifier>), ApiError> {
    let Json(request) = payload?;
    let created = state
        .catalog
        .create_modifier(&request.category, &request.option)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/admin/modifiers
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateModifierRequest>, JsonRejection>,
) -> Result<Json<Modifier>, ApiError> {
    let Json(request) = payload?;
    let (id, changes) = request.into_parts()?;
    Ok(Json(state.catalog.update_modifier(id, changes).await?))
}
