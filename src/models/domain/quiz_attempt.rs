use std::fmt;

use serde::Serialize;

use crate::models::domain::RemoteId;

/// Running quiz score as reported by the platform.
pub type Score = i64;

/// One of the four candidate answers every question offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    /// Probe order.
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::A,
        AnswerOption::B,
        AnswerOption::C,
        AnswerOption::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerOption::A => "a",
            AnswerOption::B => "b",
            AnswerOption::C => "c",
            AnswerOption::D => "d",
        }
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub question_id: RemoteId,
}

/// A freshly created attempt, questions in server order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizAttempt {
    pub quiz_id: RemoteId,
    pub questions: Vec<Question>,
}
