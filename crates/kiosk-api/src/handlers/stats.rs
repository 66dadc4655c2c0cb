use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::Utc;

use crate::{error::ApiError, state::AppState};

/// GET /api/admin/stats, recomputed on every request
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.stats.dashboard(Utc::now()).await?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(stats)))
}
