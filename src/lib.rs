pub mod bot;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::bot::QuizBot;
use crate::config::Config;
use crate::quiz::{default_questions, QuizEngine};
use crate::services::{
    question_service::QuestionService, result_service::TestResultService,
    telegram_service::TelegramService, user_service::UserService,
};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub question_service: QuestionService,
    pub result_service: TestResultService,
    pub user_service: UserService,
    pub telegram_service: TelegramService,
    pub quiz_bot: QuizBot<TestResultService>,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                Client::new()
            });

        let question_service = QuestionService::new(pool.clone());
        let result_service = TestResultService::new(pool.clone());
        let user_service = UserService::new(pool);
        let telegram_service = TelegramService::new(
            http_client,
            &config.telegram_api_url,
            &config.telegram_bot_token,
        );
        let quiz_bot = QuizBot::new(
            QuizEngine::new(default_questions()),
            result_service.clone(),
            config.completion_policy,
            config.webapp_url.clone(),
        );

        Self {
            config: Arc::new(config),
            question_service,
            result_service,
            user_service,
            telegram_service,
            quiz_bot,
        }
    }
}
