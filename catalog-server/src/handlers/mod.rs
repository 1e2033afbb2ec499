//! HTTP request handlers
//!
//! This module contains all the request handlers for the API endpoints.

pub mod health;
pub mod login;
pub mod products;

pub use crate::state::AppState;
pub use health::{health, root, HealthResponse};
pub use login::{login_handler, LoginRequest, LoginResponse};
pub use products::{
    create_product_handler, delete_product_handler, list_products_handler, CreateProductRequest,
    DeleteProductResponse, ListProductsResponse, ProductListItem,
};
