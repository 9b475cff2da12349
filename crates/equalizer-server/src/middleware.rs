//! Middleware for the REST API server.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Permissive CORS so browser front ends can call the API directly.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Request logging middleware.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

/// Bearer-token authentication, active when `EQUALIZER_REQUIRE_AUTH` is
/// set and `EQUALIZER_API_KEY` is non-empty.
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    if std::env::var("EQUALIZER_REQUIRE_AUTH").is_ok() {
        let expected = std::env::var("EQUALIZER_API_KEY").unwrap_or_default();
        if !expected.is_empty() && !bearer_token_matches(&request, &expected) {
            warn!(uri = %request.uri(), "rejected request with missing or invalid API key");
            return Err(StatusCode::UNAUTHORIZED);
        }
    }

    Ok(next.run(request).await)
}

fn bearer_token_matches(request: &Request, expected: &str) -> bool {
    request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected)
}
