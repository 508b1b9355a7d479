use crate::bot::CompletionPolicy;
use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub telegram_bot_token: String,
    pub telegram_api_url: String,
    pub telegram_webhook_secret: Option<String>,
    pub public_url: Option<String>,
    pub webapp_url: Option<String>,
    pub completion_policy: CompletionPolicy,
    pub api_rps: u32,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            database_url: get_env("DATABASE_URL")?,
            db_max_connections: get_env_parse_or("DB_MAX_CONNECTIONS", 10)?,
            telegram_bot_token: get_env("TELEGRAM_BOT_TOKEN")?,
            telegram_api_url: get_env_or("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL)
                .trim_end_matches('/')
                .to_string(),
            telegram_webhook_secret: get_env_opt("TELEGRAM_WEBHOOK_SECRET"),
            public_url: get_env_opt("PUBLIC_URL").map(|u| u.trim_end_matches('/').to_string()),
            webapp_url: get_env_opt("WEBAPP_URL"),
            completion_policy: get_env_parse_or(
                "QUIZ_COMPLETION_POLICY",
                CompletionPolicy::ConfirmedWrite,
            )?,
            api_rps: get_env_parse_or("API_RPS", 100)?,
            log_format: get_env_parse_or("LOG_FORMAT", LogFormat::Text)?,
        })
    }

    /// URL Telegram should deliver updates to, when a public base URL is known.
    pub fn webhook_url(&self) -> Option<String> {
        self.public_url
            .as_ref()
            .map(|base| format!("{}/api/webhook/telegram", base))
    }
}

fn get_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!(
            "Missing environment variable: {}",
            name
        ))),
    }
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}
