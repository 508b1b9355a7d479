use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{dto::result_dto::ResultListQuery, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/results",
    params(ResultListQuery),
    responses(
        (status = 200, description = "Filtered, sorted page of results", body = [crate::models::test_result::TestResult]),
        (status = 400, description = "Invalid filter, sort or pagination")
    )
)]
#[axum::debug_handler]
pub async fn list_results(
    State(state): State<AppState>,
    Query(query): Query<ResultListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let results = state.result_service.list(&query).await?;
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/results/{id}",
    params(
        ("id" = i32, Path, description = "Result ID")
    ),
    responses(
        (status = 200, description = "Result found", body = crate::models::test_result::TestResult),
        (status = 404, description = "Result not found")
    )
)]
#[axum::debug_handler]
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let result = state.result_service.get_by_id(id).await?;
    Ok(Json(result))
}
