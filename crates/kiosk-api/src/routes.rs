use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{handlers, state::AppState};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn build_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route("/api/menu", get(handlers::menu::ordering_menu))
        .route("/api/menu/{id}/customization", get(handlers::menu::customization));

    let admin_routes = Router::new()
        .route(
            "/menu-items",
            get(handlers::menu_items::list).patch(handlers::menu_items::update),
        )
        .route(
            "/modifiers",
            get(handlers::modifiers::list)
                .post(handlers::modifiers::create)
                .patch(handlers::modifiers::update),
        )
        .route("/stats", get(handlers::stats::dashboard));

    Router::new()
        .merge(public_routes)
        .nest("/api/admin", admin_routes)
        .with_state(state)
        // CORS
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, REQUEST_TIMEOUT))
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
