//! HTTP Basic auth gate
//!
//! Middleware guarding the `/api` subtree. Enabled only when the configured
//! username/password pair is present; otherwise every request passes through.
//! Preflight OPTIONS requests are never challenged, so browsers can complete
//! CORS negotiation before presenting credentials.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware enforcing the fixed Basic credential pair when configured.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(credentials) = state.basic_auth.as_ref() else {
        return next.run(request).await;
    };

    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic);

    match presented {
        Some((username, password))
            if username == credentials.username && password == credentials.password =>
        {
            next.run(request).await
        }
        _ => challenge(),
    }
}

/// Decode an `Authorization: Basic <base64(user:pass)>` header value.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// 401 challenge instructing the client to resend with Basic credentials.
fn challenge() -> Response {
    let mut response =
        ApiError::unauthorized("Missing or invalid credentials").into_response();
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"catalog\""),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_decode_basic_valid_header() {
        // base64("admin:hunter2")
        let header = "Basic YWRtaW46aHVudGVyMg==";
        assert_eq!(
            decode_basic(header),
            Some(("admin".to_string(), "hunter2".to_string()))
        );
    }

    #[test]
    fn test_decode_basic_password_may_contain_colon() {
        // base64("admin:pa:ss") - only the first colon separates the pair
        let header = "Basic YWRtaW46cGE6c3M=";
        assert_eq!(
            decode_basic(header),
            Some(("admin".to_string(), "pa:ss".to_string()))
        );
    }

    #[test]
    fn test_decode_basic_rejects_other_schemes() {
        assert_eq!(decode_basic("Bearer abc123"), None);
        assert_eq!(decode_basic("basic YWRtaW46aHVudGVyMg=="), None);
    }

    #[test]
    fn test_decode_basic_rejects_malformed_payloads() {
        assert_eq!(decode_basic("Basic !!!"), None);
        // base64("no-colon-here")
        assert_eq!(decode_basic("Basic bm8tY29sb24taGVyZQ=="), None);
    }

    #[test]
    fn test_challenge_carries_www_authenticate() {
        let response = challenge();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok()),
            Some("Basic realm=\"catalog\"")
        );
    }
}
