//! services/docgen/src/web/router.rs
//!
//! Assembles the page, the REST API and the Swagger UI into one router.

use crate::web::{
    page::index_handler,
    rest::{
        options_handler, reset_handler, state_handler, submit_handler, toggle_theme_handler,
        update_field_handler, ApiDoc,
    },
    state::AppState,
};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn build_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/", get(index_handler))
        .route("/api/options", get(options_handler))
        .route("/api/state", get(state_handler))
        .route("/api/draft/{field}", put(update_field_handler))
        .route("/api/submit", post(submit_handler))
        .route("/api/reset", post(reset_handler))
        .route("/api/theme/toggle", post(toggle_theme_handler))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
