use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all contact endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/", get(handler::root_handler))
        .route("/health", get(handler::health_handler))
        .route("/create", post(handler::create_handler))
        .route("/update", put(handler::update_handler))
        .route("/delete", delete(handler::delete_handler))
        .route("/search", post(handler::search_handler))
        .route("/contacts", get(handler::list_handler))
        .route("/contacts/:id", get(handler::get_handler))
        .fallback(handler::not_found_handler)
        .layer(middleware::map_response(handler::method_not_allowed_as_json))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    let router = if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}
