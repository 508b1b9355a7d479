use tower_http::cors::{Any, CorsLayer};

/// Any origin, method and header; the API is consumed by a separately hosted
/// web front-end.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
