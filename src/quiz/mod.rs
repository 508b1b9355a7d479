//! The three-question screening quiz run inside the Telegram chat.

pub mod engine;

pub use engine::{CompletedAttempt, Conversation, QuizEngine, Stage, Step};

pub const QUESTION_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl QuizQuestion {
    pub fn new(text: &str, options: &[&str], correct: &str) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct: correct.to_string(),
        }
    }
}

pub type QuestionSet = [QuizQuestion; QUESTION_COUNT];

/// The fixed question set asked by the bot.
pub fn default_questions() -> QuestionSet {
    [
        QuizQuestion::new(
            "Какой оператор используется для проверки равенства в Python?",
            &["==", "=", "!="],
            "==",
        ),
        QuizQuestion::new(
            "Как называется структура данных, которая упорядочивает элементы по ключу?",
            &["Список", "Словарь", "Множество"],
            "Словарь",
        ),
        QuizQuestion::new(
            "Какой тип цикла используется для обхода итерируемых объектов в Python?",
            &["for", "while", "do-while"],
            "for",
        ),
    ]
}

/// Number of positions where the submitted answer equals the correct one.
/// Comparison is exact and case-sensitive.
pub fn score(questions: &QuestionSet, answers: &[String; QUESTION_COUNT]) -> i32 {
    questions
        .iter()
        .zip(answers.iter())
        .filter(|(q, a)| q.correct == **a)
        .count() as i32
}
