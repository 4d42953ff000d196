use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer from the configured origin allowlist.
///
/// An empty list means permissive CORS: the course frontend runs on an
/// arbitrary localhost port and there are no credentialed requests to
/// protect.
pub fn create_cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins = allowed_origins
        .into_iter()
        .filter_map(|s| s.parse::<axum::http::HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
