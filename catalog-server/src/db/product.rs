//! Product entity and repository
//!
//! Products carry their image inline as base64 text; the list endpoint
//! synthesizes a browser-renderable data-URI from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;
use uuid::Uuid;

/// Mime type assumed when a record carries none.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Product entity from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product unique identifier
    #[schema(value_type = String, example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "Widget")]
    pub name: String,
    /// Unit price
    #[schema(example = 9.99)]
    pub price: f64,
    /// Units in stock
    #[schema(example = 0)]
    pub stock: i32,
    /// Base64-encoded image bytes
    pub image_base64: String,
    /// Mime type of the encoded image
    #[schema(example = "image/jpeg")]
    pub image_mime_type: String,
    /// Creation timestamp
    #[schema(value_type = String, example = "2026-01-08T10:00:00Z")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Synthesize the inline-renderable `data:<mime>;base64,<data>` form,
    /// falling back to jpeg when the stored mime type is empty.
    pub fn image_data_uri(&self) -> String {
        let mime = if self.image_mime_type.is_empty() {
            DEFAULT_IMAGE_MIME
        } else {
            self.image_mime_type.as_str()
        };
        format!("data:{};base64,{}", mime, self.image_base64)
    }
}

/// Validated input for creating a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub image_base64: String,
    pub image_mime_type: String,
}

/// Repository for product database operations
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// List SQL: most recently created products first.
    const LIST_SQL: &'static str = r#"
        SELECT id, name, price, stock, image_base64, image_mime_type, created_at
        FROM products
        ORDER BY created_at DESC
    "#;

    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all products, most recent first.
    pub async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(Self::LIST_SQL)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a product and return the stored record with its assigned id.
    pub async fn create(&self, input: &NewProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock, image_base64, image_mime_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, stock, image_base64, image_mime_type, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(&input.image_base64)
        .bind(&input.image_mime_type)
        .fetch_one(&self.pool)
        .await
    }

    /// Delete a product by id; returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Widget".to_string(),
            price: 9.99,
            stock: 0,
            image_base64: "QQ==".to_string(),
            image_mime_type: "image/jpeg".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_image_data_uri() {
        let product = sample_product();
        assert_eq!(product.image_data_uri(), "data:image/jpeg;base64,QQ==");
    }

    #[test]
    fn test_image_data_uri_defaults_empty_mime_to_jpeg() {
        let mut product = sample_product();
        product.image_mime_type = String::new();
        assert_eq!(product.image_data_uri(), "data:image/jpeg;base64,QQ==");
    }

    #[test]
    fn test_image_data_uri_keeps_explicit_mime() {
        let mut product = sample_product();
        product.image_mime_type = "image/png".to_string();
        assert_eq!(product.image_data_uri(), "data:image/png;base64,QQ==");
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = sample_product();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("imageBase64").is_some());
        assert!(json.get("imageMimeType").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image_base64").is_none());
    }

    #[test]
    fn test_list_sql_orders_newest_first() {
        assert!(
            ProductRepository::LIST_SQL.contains("ORDER BY created_at DESC"),
            "list must return most recently created products first"
        );
    }
}
