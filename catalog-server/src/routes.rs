//! Router configuration module
//!
//! Configures all routes, middleware layers, and creates the application router.

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::require_basic_auth;
use crate::config::Config;
use crate::cors::cors_layer;
use crate::handlers::{
    create_product_handler, delete_product_handler, health, list_products_handler, login_handler,
    root,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the application router with default config (for testing)
pub fn create_router(state: AppState) -> Router {
    create_router_with_config(&Config::default(), state)
}

/// Create the application router with custom configuration
pub fn create_router_with_config(config: &Config, state: AppState) -> Router {
    // Data routes carry the auth gate; root and health stay unauthenticated
    // so liveness probes keep working whatever the configuration.
    let api = Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/products/{id}", delete(delete_product_handler))
        .route("/login", post(login_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    let body_limit = RequestBodyLimitLayer::new(config.body_limit_mb * 1024 * 1024);

    let timeout = TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.timeout_secs),
    );

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(body_limit)
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
}
