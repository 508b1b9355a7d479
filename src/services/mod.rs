pub mod question_service;
pub mod result_service;
pub mod telegram_service;
pub mod user_service;
