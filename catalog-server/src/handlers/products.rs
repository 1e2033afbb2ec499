//! Product resource handlers
//!
//! List, create, and delete operations over the product collection.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::{NewProduct, Product, DEFAULT_IMAGE_MIME};
use crate::error::ApiError;
use crate::handlers::AppState;

/// A listed product, augmented with its inline-renderable image.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListItem {
    /// The stored record
    #[serde(flatten)]
    pub product: Product,
    /// Data-URI form of the image (`data:<mime>;base64,<data>`)
    pub image: String,
}

impl From<Product> for ProductListItem {
    fn from(product: Product) -> Self {
        let image = product.image_data_uri();
        Self { product, image }
    }
}

/// Response for product listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ListProductsResponse {
    /// Products, most recently created first
    pub items: Vec<ProductListItem>,
}

/// List all products
///
/// Returns the whole catalog ordered by creation time, newest first.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = ListProductsResponse),
        (status = 401, description = "Basic-auth challenge (when the gate is enabled)"),
        (status = 500, description = "Persistence error"),
        (status = 503, description = "Database not available")
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<ListProductsResponse>, ApiError> {
    let repo = state
        .products
        .as_ref()
        .ok_or_else(|| ApiError::service_unavailable("Database not configured"))?;

    let items = repo
        .list()
        .await?
        .into_iter()
        .map(ProductListItem::from)
        .collect();

    Ok(Json(ListProductsResponse { items }))
}

/// Request body for creating a product.
///
/// Required fields arrive as `Option` so their absence can be answered with a
/// descriptive 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Display name (required)
    pub name: Option<String>,
    /// Unit price (required)
    pub price: Option<f64>,
    /// Units in stock (default: 0)
    #[serde(default)]
    pub stock: Option<i32>,
    /// Base64-encoded image bytes (required)
    pub image_base64: Option<String>,
    /// Mime type of the image (default: image/jpeg when absent or empty)
    #[serde(default)]
    pub image_mime_type: Option<String>,
}

impl CreateProductRequest {
    /// Validate required fields and apply defaults.
    fn into_new_product(self) -> Result<NewProduct, ApiError> {
        let name = self.name.filter(|s| !s.is_empty());
        let image_base64 = self.image_base64.filter(|s| !s.is_empty());

        match (name, self.price, image_base64) {
            (Some(name), Some(price), Some(image_base64)) => Ok(NewProduct {
                name,
                price,
                stock: self.stock.unwrap_or(0),
                image_base64,
                image_mime_type: self
                    .image_mime_type
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
            }),
            _ => Err(ApiError::bad_request(
                "name, price and imageBase64 are required",
            )),
        }
    }
}

/// Create a product
///
/// Returns the stored record with its server-assigned id. The raw base64
/// image field is returned as stored, not the data-URI form.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Basic-auth challenge (when the gate is enabled)"),
        (status = 500, description = "Persistence error"),
        (status = 503, description = "Database not available")
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let input = request.into_new_product()?;

    let repo = state
        .products
        .as_ref()
        .ok_or_else(|| ApiError::service_unavailable("Database not configured"))?;

    let product = repo.create(&input).await?;

    tracing::info!(id = %product.id, name = %product.name, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Response for product deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteProductResponse {
    /// Always true on success
    pub ok: bool,
}

/// Delete a product by id
///
/// The id arrives as a raw string and is parsed here: a malformed id is an
/// unhandled server-side error (500), not a 404, matching the persistence
/// layer's behavior for ids it cannot cast.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id (UUID)")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteProductResponse),
        (status = 401, description = "Basic-auth challenge (when the gate is enabled)"),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Malformed id or persistence error"),
        (status = 503, description = "Database not available")
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProductResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|e| ApiError::internal(format!("invalid product id {id:?}: {e}")))?;

    let repo = state
        .products
        .as_ref()
        .ok_or_else(|| ApiError::service_unavailable("Database not configured"))?;

    let deleted = repo.delete(id).await?;

    if deleted {
        tracing::info!(%id, "product deleted");
        Ok(Json(DeleteProductResponse { ok: true }))
    } else {
        Err(ApiError::not_found("Product not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateProductRequest {
        CreateProductRequest {
            name: Some("Widget".to_string()),
            price: Some(9.99),
            stock: None,
            image_base64: Some("QQ==".to_string()),
            image_mime_type: None,
        }
    }

    #[test]
    fn test_defaults_applied_on_create() {
        let input = full_request().into_new_product().unwrap();
        assert_eq!(input.stock, 0);
        assert_eq!(input.image_mime_type, "image/jpeg");
    }

    #[test]
    fn test_explicit_values_kept() {
        let mut request = full_request();
        request.stock = Some(7);
        request.image_mime_type = Some("image/png".to_string());

        let input = request.into_new_product().unwrap();
        assert_eq!(input.stock, 7);
        assert_eq!(input.image_mime_type, "image/png");
    }

    #[test]
    fn test_empty_mime_type_falls_back_to_jpeg() {
        let mut request = full_request();
        request.image_mime_type = Some(String::new());

        let input = request.into_new_product().unwrap();
        assert_eq!(input.image_mime_type, "image/jpeg");
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let mut request = full_request();
        request.name = None;
        assert!(request.into_new_product().is_err());

        let mut request = full_request();
        request.price = None;
        assert!(request.into_new_product().is_err());

        let mut request = full_request();
        request.image_base64 = None;
        assert!(request.into_new_product().is_err());
    }

    #[test]
    fn test_empty_required_strings_rejected() {
        let mut request = full_request();
        request.name = Some(String::new());
        assert!(request.into_new_product().is_err());

        let mut request = full_request();
        request.image_base64 = Some(String::new());
        assert!(request.into_new_product().is_err());
    }

    #[test]
    fn test_list_item_carries_data_uri() {
        let product = Product {
            id: Uuid::new_v4(),
            name: "Widget".to_string(),
            price: 9.99,
            stock: 0,
            image_base64: "QQ==".to_string(),
            image_mime_type: "image/jpeg".to_string(),
            created_at: chrono::Utc::now(),
        };

        let item = ProductListItem::from(product);
        assert_eq!(item.image, "data:image/jpeg;base64,QQ==");

        // Flattened record fields and the synthesized image sit side by side.
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["image"], "data:image/jpeg;base64,QQ==");
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["imageBase64"], "QQ==");
    }
}
