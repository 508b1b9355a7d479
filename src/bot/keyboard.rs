use serde::Serialize;

/// Telegram `reply_markup` variants the bot sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Inline {
        inline_keyboard: Vec<Vec<InlineButton>>,
    },
    Keyboard {
        keyboard: Vec<Vec<KeyboardButton>>,
        resize_keyboard: bool,
        one_time_keyboard: bool,
    },
    Remove {
        remove_keyboard: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineButton {
    pub text: String,
    pub web_app: WebAppInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebAppInfo {
    pub url: String,
}

impl ReplyMarkup {
    /// One-time keyboard with one row per answer option.
    pub fn options(options: &[String]) -> Self {
        ReplyMarkup::Keyboard {
            keyboard: options
                .iter()
                .map(|o| vec![KeyboardButton { text: o.clone() }])
                .collect(),
            resize_keyboard: true,
            one_time_keyboard: true,
        }
    }

    pub fn web_app(text: &str, url: &str) -> Self {
        ReplyMarkup::Inline {
            inline_keyboard: vec![vec![InlineButton {
                text: text.to_string(),
                web_app: WebAppInfo {
                    url: url.to_string(),
                },
            }]],
        }
    }

    pub fn remove() -> Self {
        ReplyMarkup::Remove {
            remove_keyboard: true,
        }
    }
}
