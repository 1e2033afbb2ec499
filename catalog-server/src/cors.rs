//! CORS gate
//!
//! Evaluates the declared `Origin` of every inbound request against a fixed
//! allow-list of known front-end origins plus a trusted deployment-platform
//! suffix. Requests without an `Origin` header (same-origin or non-browser
//! callers) pass untouched; preflight OPTIONS requests are answered by the
//! layer without reaching downstream handlers.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Known front-end origins allowed to call this API from a browser.
const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "https://catalog-frontend.vercel.app",
];

/// Preview deployments get fresh subdomains on every push; trust the whole
/// platform suffix instead of chasing them.
const TRUSTED_ORIGIN_SUFFIX: &str = ".vercel.app";

/// Decide whether a declared origin may make cross-origin requests.
///
/// The origin is normalized by stripping a single trailing slash before
/// matching. Exact allow-list matches and trusted-suffix matches are allowed;
/// everything else is denied.
pub fn origin_allowed(origin: &str) -> bool {
    let origin = origin.strip_suffix('/').unwrap_or(origin);
    ALLOWED_ORIGINS.contains(&origin) || origin.ends_with(TRUSTED_ORIGIN_SUFFIX)
}

/// Create the CORS layer applied to the whole router.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            match origin.to_str() {
                Ok(origin) if origin_allowed(origin) => true,
                Ok(origin) => {
                    tracing::warn!(origin = %origin, "CORS: rejected origin");
                    false
                }
                Err(_) => {
                    tracing::warn!("CORS: rejected non-UTF-8 origin");
                    false
                }
            }
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_origins_allowed() {
        for origin in ALLOWED_ORIGINS {
            assert!(origin_allowed(origin), "{origin} should be allowed");
        }
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        assert!(origin_allowed("http://localhost:5173/"));
        assert!(origin_allowed("https://catalog-frontend.vercel.app/"));
    }

    #[test]
    fn test_trusted_suffix_allowed() {
        assert!(origin_allowed("https://catalog-git-feature-x.vercel.app"));
        assert!(origin_allowed("https://anything.vercel.app"));
    }

    #[test]
    fn test_unknown_origins_denied() {
        assert!(!origin_allowed("https://evil.example.com"));
        assert!(!origin_allowed("http://localhost:8080"));
        // Suffix match is on the raw string, so the bare platform apex
        // without a leading dot does not match.
        assert!(!origin_allowed("https://vercel.app/"));
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        assert!(!origin_allowed("http://localhost:5173//"));
    }

    #[test]
    fn test_cors_layer_creation() {
        let _layer = cors_layer();
    }
}
