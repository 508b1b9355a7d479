use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{score, QuestionSet, QuizQuestion};

/// Progress of one user through the quiz. A user with no entry is idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversation {
    AwaitingQ1,
    AwaitingQ2 { q1: String },
    AwaitingQ3 { q1: String, q2: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingQ1,
    AwaitingQ2,
    AwaitingQ3,
}

impl Conversation {
    pub fn stage(&self) -> Stage {
        match self {
            Conversation::AwaitingQ1 => Stage::AwaitingQ1,
            Conversation::AwaitingQ2 { .. } => Stage::AwaitingQ2,
            Conversation::AwaitingQ3 { .. } => Stage::AwaitingQ3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedAttempt {
    pub answers: [String; 3],
    pub score: i32,
}

/// Outcome of feeding one event into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The user is idle and the message was not a start command.
    Ignored,
    /// The next question to present; `index` is zero-based.
    Ask { index: usize, question: QuizQuestion },
    /// The third answer arrived. The session has already been cleared.
    Completed(CompletedAttempt),
}

#[derive(Clone)]
pub struct QuizEngine {
    questions: Arc<QuestionSet>,
    sessions: Arc<Mutex<HashMap<String, Conversation>>>,
}

impl QuizEngine {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions: Arc::new(questions),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Begins a fresh attempt, dropping whatever the user had in progress.
    pub fn start(&self, user_id: &str) -> Step {
        let previous = self
            .sessions()
            .insert(user_id.to_string(), Conversation::AwaitingQ1);
        if let Some(previous) = previous {
            tracing::info!(user_id, stage = ?previous.stage(), "discarding quiz attempt in progress");
        }
        self.ask(0)
    }

    /// Records `text` as the answer to the current question.
    pub fn answer(&self, user_id: &str, text: &str) -> Step {
        let answer = text.trim().to_string();
        let mut sessions = self.sessions();

        let Some(current) = sessions.remove(user_id) else {
            return Step::Ignored;
        };

        match current {
            Conversation::AwaitingQ1 => {
                sessions.insert(user_id.to_string(), Conversation::AwaitingQ2 { q1: answer });
                self.ask(1)
            }
            Conversation::AwaitingQ2 { q1 } => {
                sessions.insert(
                    user_id.to_string(),
                    Conversation::AwaitingQ3 { q1, q2: answer },
                );
                self.ask(2)
            }
            Conversation::AwaitingQ3 { q1, q2 } => {
                let answers = [q1, q2, answer];
                let score = score(&self.questions, &answers);
                Step::Completed(CompletedAttempt { answers, score })
            }
        }
    }

    pub fn stage(&self, user_id: &str) -> Option<Stage> {
        self.sessions().get(user_id).map(Conversation::stage)
    }

    fn ask(&self, index: usize) -> Step {
        Step::Ask {
            index,
            question: self.questions[index].clone(),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, Conversation>> {
        // A panic while holding the lock cannot leave a map entry half-written.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
