use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde_json::json;

const CAT_GIF_URL: &str = "https://media.giphy.com/media/v6aOjy0Qo1fIA/giphy.gif";

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn root() -> Redirect {
    Redirect::temporary(CAT_GIF_URL)
}
