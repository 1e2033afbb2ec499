//! Session handler
//!
//! Validates a username/password pair against the stored user record and
//! issues an opaque token derived from the user's id.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::User;
use crate::error::ApiError;
use crate::handlers::AppState;

/// Request body for login
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username (required)
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Password (required)
    pub password: Option<String>,
}

/// Response for a successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Opaque session token
    #[schema(example = "ok-550e8400-e29b-41d4-a716-446655440000")]
    pub token: String,
}

/// The token is the user's id behind a fixed prefix; nothing is persisted
/// and nothing expires.
fn token_for(user_id: Uuid) -> String {
    format!("ok-{}", user_id)
}

/// Log in with username and password
///
/// Username lookup is exact and case-sensitive.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Unknown user or wrong password"),
        (status = 500, description = "Persistence error"),
        (status = 503, description = "Database not available")
    )
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (username, password) = match (
        request.username.filter(|s| !s.is_empty()),
        request.password.filter(|s| !s.is_empty()),
    ) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            return Err(ApiError::bad_request(
                "username and password are required",
            ))
        }
    };

    let repo = state
        .users
        .as_ref()
        .ok_or_else(|| ApiError::service_unavailable("Database not configured"))?;

    let user: User = repo
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("user not found"))?;

    // TODO: replace the plaintext comparison with a password hash (argon2)
    // once user provisioning moves in-process.
    if user.password != password {
        return Err(ApiError::unauthorized("incorrect password"));
    }

    tracing::info!(user_id = %user.id, username = %user.username, "login successful");

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        token: token_for(user.id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_prefixed_user_id() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(token_for(id), "ok-550e8400-e29b-41d4-a716-446655440000");
    }
}
