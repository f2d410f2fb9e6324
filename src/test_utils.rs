#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Question, QuizAttempt, RemoteId};

    /// Creates a quiz attempt with numeric question ids in the given order
    pub fn quiz_attempt(quiz_id: i64, question_ids: &[i64]) -> QuizAttempt {
        QuizAttempt {
            quiz_id: RemoteId::Number(quiz_id),
            questions: question_ids
                .iter()
                .map(|id| Question {
                    question_id: RemoteId::Number(*id),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::RemoteId;

    #[test]
    fn test_fixtures_quiz_attempt() {
        let attempt = quiz_attempt(900, &[3, 1]);
        assert_eq!(attempt.quiz_id, RemoteId::Number(900));
        assert_eq!(attempt.questions.len(), 2);
        assert_eq!(attempt.questions[0].question_id, RemoteId::Number(3));
    }
}
