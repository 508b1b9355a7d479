use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A screening question administered through the REST API.
///
/// `options` is stored exactly as the client sent it; the service does not
/// interpret its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub options: String,
    pub correct: String,
}
