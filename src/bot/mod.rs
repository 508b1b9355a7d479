//! Chat front-end: turns Telegram messages into quiz transitions and back
//! into replies.

pub mod keyboard;
pub mod quiz_bot;

use serde::Serialize;
use std::str::FromStr;

pub use keyboard::ReplyMarkup;
pub use quiz_bot::QuizBot;

/// What to do when the result row cannot be written at quiz completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Report the score as final only once the insert succeeded.
    #[default]
    ConfirmedWrite,
    /// Report the score regardless and only log a failed insert.
    FireAndForget,
}

impl FromStr for CompletionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "confirmed" | "confirmed_write" => Ok(CompletionPolicy::ConfirmedWrite),
            "fire_and_forget" => Ok(CompletionPolicy::FireAndForget),
            other => Err(format!("unknown completion policy '{}'", other)),
        }
    }
}

/// A text message from a user, stripped of Telegram envelope details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub user_id: i64,
    pub chat_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl OutgoingMessage {
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_markup: None,
        }
    }

    pub fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Test,
}

impl Command {
    /// Recognises `/start` and `/test`, including the `/test@SomeBot` form
    /// Telegram uses in group chats.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);
        match name {
            "start" => Some(Command::Start),
            "test" => Some(Command::Test),
            _ => None,
        }
    }
}
