use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    dto::auth_dto::{CredentialsPayload, LoginResponse, RegisterResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/register",
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Username taken or invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .user_service
        .register(&payload.username, &payload.password)
        .await?;
    Ok((
        StatusCode::OK,
        Json(RegisterResponse {
            message: "User registered".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Invalid username or password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .authenticate(&payload.username, &payload.password)
        .await?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        username: user.username,
    }))
}
