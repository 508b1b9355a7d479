use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    bot::IncomingMessage,
    error::{Error, Result},
    utils::crypto::secrets_match,
    AppState,
};

pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub message_id: i64,
    pub from: Option<TelegramUser>,
    pub chat: TelegramChat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
    pub r#type: String,
}

impl TelegramMessage {
    fn into_incoming(self) -> Option<IncomingMessage> {
        let from = self.from.filter(|u| !u.is_bot)?;
        Some(IncomingMessage {
            user_id: from.id,
            chat_id: self.chat.id,
            text: self.text?,
        })
    }
}

pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<TelegramUpdate>,
) -> Result<impl IntoResponse> {
    if let Some(expected) = &state.config.telegram_webhook_secret {
        let provided = headers
            .get(SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !secrets_match(expected, provided) {
            tracing::warn!(update_id = update.update_id, "rejected webhook with bad secret token");
            return Err(Error::Unauthorized("invalid_webhook_secret".to_string()));
        }
    }

    tracing::info!(update_id = update.update_id, "received Telegram update");

    let Some(incoming) = update.message.and_then(TelegramMessage::into_incoming) else {
        return Ok(StatusCode::OK);
    };

    let replies = state.quiz_bot.handle(&incoming).await;

    // Telegram redelivers updates answered with an error, which would replay
    // the answer into the quiz, so delivery failures are only logged.
    if let Err(e) = state.telegram_service.send_all(&replies).await {
        tracing::warn!(chat_id = incoming.chat_id, error = %e, "failed to deliver bot replies");
    }

    Ok(StatusCode::OK)
}
