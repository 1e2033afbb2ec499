//! Catalog Server Library - REST API components for the product catalog
//!
//! This library exposes the server components for use in integration tests.
//! The main binary uses these same components.

pub mod auth;
pub mod config;
pub mod cors;
pub mod db;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use config::{BasicAuthCredentials, Config, Environment};
pub use db::{NewProduct, Product, ProductRepository, SearchLog, User, UserRepository};
pub use error::ApiError;
pub use openapi::ApiDoc;
pub use routes::{create_router, create_router_with_config};
pub use state::AppState;
