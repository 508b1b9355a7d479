use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    auth_dto::{CredentialsPayload, LoginResponse, RegisterResponse},
    question_dto::{DeleteQuestionResponse, QuestionPayload},
    result_dto::{ResultSortField, SortOrder},
};
use crate::models::{question::Question, test_result::TestResult};

#[derive(OpenApi)]
#[openapi(
    info(title = "HR technical screening API"),
    paths(
        super::health::health,
        super::auth::register,
        super::auth::login,
        super::questions::list_questions,
        super::questions::get_question,
        super::questions::create_question,
        super::questions::update_question,
        super::questions::delete_question,
        super::results::list_results,
        super::results::get_result,
    ),
    components(schemas(
        Question,
        QuestionPayload,
        DeleteQuestionResponse,
        TestResult,
        ResultSortField,
        SortOrder,
        CredentialsPayload,
        RegisterResponse,
        LoginResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
