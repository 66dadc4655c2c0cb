//! Customer ordering screens

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use kiosk_core::domain::{Customization, OrderingMenu};

use crate::{error::ApiError, state::AppState};

/// GET /api/menu
pub async fn ordering_menu(State(state): State<AppState>) -> Result<Json<OrderingMenu>, ApiError> {
    Ok(Json(state.catalog.ordering_menu().await?))
}

/// GET /api/menu/{id}/customization
pub async fn customization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customization>, ApiError> {
    Ok(Json(state.catalog.customization_for(id).await?))
}
