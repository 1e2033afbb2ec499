//! OpenAPI documentation configuration
//!
//! Generates the OpenAPI 3.0 specification for the catalog API.

use utoipa::OpenApi;

use crate::db::Product;
use crate::handlers::{
    CreateProductRequest, DeleteProductResponse, HealthResponse, ListProductsResponse,
    LoginRequest, LoginResponse, ProductListItem,
};

/// Catalog API - OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = r#"
Minimal HTTP backend for a product catalog.

- **Products** - list, create, and delete catalog entries; images travel
  inline as base64 text and are returned as data-URIs for rendering
- **Session** - username/password login issuing an opaque token
- **Health** - liveness and monitoring endpoints

When the `AUTH_USERNAME`/`AUTH_PASSWORD` pair is configured, every `/api`
request except CORS preflights must carry matching HTTP Basic credentials.
"#,
        license(name = "MIT OR Apache-2.0")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    tags(
        (name = "Products", description = "Product catalog operations"),
        (name = "Session", description = "Login and token issuance"),
        (name = "Health", description = "Service health endpoints")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::products::list_products_handler,
        crate::handlers::products::create_product_handler,
        crate::handlers::products::delete_product_handler,
        crate::handlers::login::login_handler,
    ),
    components(
        schemas(
            HealthResponse,
            Product,
            ProductListItem,
            ListProductsResponse,
            CreateProductRequest,
            DeleteProductResponse,
            LoginRequest,
            LoginResponse,
        )
    )
)]
pub struct ApiDoc;
