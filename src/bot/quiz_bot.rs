use crate::models::test_result::NewTestResult;
use crate::quiz::{CompletedAttempt, QuizEngine, QuizQuestion, Step, QUESTION_COUNT};
use crate::services::result_service::ResultStore;

use super::{Command, CompletionPolicy, IncomingMessage, OutgoingMessage, ReplyMarkup};

const GREETING: &str = "Привет! Это бот для технического скрининга.";
const GREETING_WEBAPP: &str =
    "Привет! Это бот для технического скрининга.\nНажми кнопку ниже, чтобы начать тест.";
const WEBAPP_BUTTON: &str = "Начать тест";
const WELCOME: &str = "Добро пожаловать на технический скрининг!";
const CHOOSE_ANSWER: &str = "Выберите ответ:";
const HINT: &str = "Чтобы начать тест, используйте команду /test";
const SAVE_FAILED: &str =
    "Не удалось сохранить результат. Пожалуйста, пройдите тест ещё раз позже (/test).";
const ORDINALS: [&str; QUESTION_COUNT] = ["Первый вопрос", "Второй вопрос", "Третий вопрос"];

/// Conversational front-end over [`QuizEngine`].
///
/// Both historical bot flavours live here: with a web-app URL configured,
/// `/start` links to the external web flow; without one it starts the quiz
/// in the chat. `/test` always starts the in-chat quiz.
#[derive(Clone)]
pub struct QuizBot<S> {
    engine: QuizEngine,
    store: S,
    policy: CompletionPolicy,
    webapp_url: Option<String>,
}

impl<S: ResultStore> QuizBot<S> {
    pub fn new(
        engine: QuizEngine,
        store: S,
        policy: CompletionPolicy,
        webapp_url: Option<String>,
    ) -> Self {
        Self {
            engine,
            store,
            policy,
            webapp_url,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub async fn handle(&self, msg: &IncomingMessage) -> Vec<OutgoingMessage> {
        let user_id = msg.user_id.to_string();

        match Command::parse(&msg.text) {
            Some(Command::Start) => {
                tracing::info!(user_id = msg.user_id, "handling /start");
                if let Some(url) = &self.webapp_url {
                    return vec![OutgoingMessage::text(msg.chat_id, GREETING_WEBAPP)
                        .with_markup(ReplyMarkup::web_app(WEBAPP_BUTTON, url))];
                }
                let mut replies = vec![OutgoingMessage::text(msg.chat_id, GREETING)];
                let step = self.engine.start(&user_id);
                replies.extend(self.respond(msg, step).await);
                replies
            }
            Some(Command::Test) => {
                tracing::info!(user_id = msg.user_id, "handling /test");
                let step = self.engine.start(&user_id);
                self.respond(msg, step).await
            }
            None => {
                let step = self.engine.answer(&user_id, &msg.text);
                self.respond(msg, step).await
            }
        }
    }

    async fn respond(&self, msg: &IncomingMessage, step: Step) -> Vec<OutgoingMessage> {
        match step {
            Step::Ignored => vec![OutgoingMessage::text(msg.chat_id, HINT)],
            Step::Ask { index, question } => present(msg.chat_id, index, &question),
            Step::Completed(attempt) => vec![self.complete(msg, attempt).await],
        }
    }

    async fn complete(&self, msg: &IncomingMessage, attempt: CompletedAttempt) -> OutgoingMessage {
        let CompletedAttempt { answers, score } = attempt;
        let [q1, q2, q3] = answers;
        let record = NewTestResult {
            user_id: msg.user_id.to_string(),
            q1,
            q2,
            q3,
            score,
        };

        let saved = match self.store.insert(record).await {
            Ok(row) => {
                tracing::info!(user_id = msg.user_id, result_id = row.id, score, "quiz result saved");
                true
            }
            Err(e) => {
                tracing::error!(user_id = msg.user_id, score, error = %e, "failed to save quiz result");
                false
            }
        };

        let summary = format!(
            "Тест завершен! Ваш результат: {} из {}",
            score, QUESTION_COUNT
        );
        let text = match (saved, self.policy) {
            (false, CompletionPolicy::ConfirmedWrite) => format!("{}\n\n{}", summary, SAVE_FAILED),
            _ => summary,
        };

        OutgoingMessage::text(msg.chat_id, text).with_markup(ReplyMarkup::remove())
    }
}

fn present(chat_id: i64, index: usize, question: &QuizQuestion) -> Vec<OutgoingMessage> {
    let heading = format!("{}:\n{}", ORDINALS[index], question.text);
    let text = if index == 0 {
        format!("{}\n\n{}", WELCOME, heading)
    } else {
        heading
    };

    vec![
        OutgoingMessage::text(chat_id, text),
        OutgoingMessage::text(chat_id, CHOOSE_ANSWER)
            .with_markup(ReplyMarkup::options(&question.options)),
    ]
}
