pub mod auth;
pub mod docs;
pub mod health;
pub mod questions;
pub mod results;
pub mod telegram;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors::permissive_cors, rate_limit};
use crate::AppState;

pub fn app(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json));

    let rest_api = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/questions/:id",
            get(questions::get_question)
                .put(questions::update_question)
                .delete(questions::delete_question),
        )
        .route("/results", get(results::list_results))
        .route("/results/:id", get(results::get_result))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(state.config.api_rps),
            rate_limit::rps_middleware,
        ));

    let bot_routes = Router::new().route("/api/webhook/telegram", post(telegram::handle_webhook));

    base_routes
        .merge(rest_api)
        .merge(bot_routes)
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
}
