//! API error handling module
//!
//! Provides a unified error type for all API endpoints. Every error renders
//! as a uniform `{"error": string}` JSON body; server-side failures keep
//! their detail in the logs and return only a generic message to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// API error type with structured variants for different error categories
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request - client provided invalid input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unauthorized - missing or invalid credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Not found - requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error - unexpected server-side failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Service unavailable - the database was not reachable at startup
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Database error - query execution failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a service unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get sanitized error message for the client response.
    ///
    /// Server-side failures never leak their detail to the caller.
    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) | Self::Database(_) => "Internal server error".to_string(),
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::ServiceUnavailable(msg) => msg.clone(),
        }
    }

    /// Get the error category for logging
    fn error_category(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Database(_) => "database",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let category = self.error_category();
        let internal_message = self.to_string();
        let client_message = self.client_message();

        // Log based on severity, always including internal details
        match &self {
            Self::BadRequest(_) | Self::NotFound(_) => {
                tracing::warn!(
                    status = %status,
                    category = category,
                    error = %internal_message,
                    "Client error"
                );
            }
            Self::Unauthorized(_) => {
                tracing::warn!(
                    status = %status,
                    category = category,
                    error = %internal_message,
                    "Authentication error"
                );
            }
            Self::ServiceUnavailable(_) => {
                tracing::warn!(
                    status = %status,
                    category = category,
                    error = %internal_message,
                    "Service unavailable"
                );
            }
            Self::Internal(_) | Self::Database(_) => {
                tracing::error!(
                    status = %status,
                    category = category,
                    error = %internal_message,
                    "Server error (internal details logged)"
                );
            }
        }

        let body = serde_json::json!({
            "error": client_message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::service_unavailable("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_server_errors_hide_detail_from_client() {
        let err = ApiError::internal("connection pool exhausted at worker 7");
        assert_eq!(err.client_message(), "Internal server error");

        let err = ApiError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = ApiError::bad_request("name, price and imageBase64 are required");
        assert_eq!(
            err.client_message(),
            "name, price and imageBase64 are required"
        );
    }
}
