//! Catalog Server - REST API for a small product catalog
//!
//! Exposes the catalog over HTTP:
//! - GET/POST /api/products, DELETE /api/products/{id}
//! - POST /api/login
//! - GET / and GET /health for probing

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use catalog_server::config::{Config, Environment};
use catalog_server::db::{self, ProductRepository, UserRepository};
use catalog_server::routes::create_router_with_config;
use catalog_server::state::AppState;

#[tokio::main]
async fn main() {
    // Development loads a local .env file; production relies on real
    // environment variables. The flag itself must come from the real
    // environment, so check it before loading anything.
    let is_production = std::env::var("APP_ENV")
        .map(|v| v == "production")
        .unwrap_or(false);
    if !is_production {
        dotenv::dotenv().ok();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    if config.environment == Environment::Production {
        tracing::info!("running in production mode");
    }

    // A missing or unreachable database is logged, not fatal: the process
    // keeps serving and data routes answer 503.
    let (products, users) = match config.database_url.as_deref() {
        Some(url) => match db::connect(url).await {
            Ok(pool) => (
                Some(Arc::new(ProductRepository::new(pool.clone()))),
                Some(Arc::new(UserRepository::new(pool))),
            ),
            Err(e) => {
                tracing::error!(error = %e, "database connection failed, continuing without persistence");
                (None, None)
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set, data routes will answer 503");
            (None, None)
        }
    };

    if config.basic_auth.is_some() {
        tracing::info!("basic auth gate enabled for /api routes");
    } else {
        tracing::warn!("basic auth gate disabled (AUTH_USERNAME/AUTH_PASSWORD not set)");
    }

    let state = AppState {
        products,
        users,
        basic_auth: config.basic_auth.clone(),
    };

    let app = create_router_with_config(&config, state);
    let addr = config.socket_addr();

    tracing::info!(%addr, "catalog server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
