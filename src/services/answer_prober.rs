use crate::models::domain::{AccessToken, AnswerOption, RemoteId, Score};
use crate::services::quiz_api::QuizApi;

/// Result of probing a single question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// `option` raised the score by exactly one.
    Locked { option: AnswerOption, score: Score },
    /// All four options were tried without the score moving to `before + 1`.
    Unsolved { score: Score },
    /// An upstream call failed; remaining options were not tried.
    Aborted { score: Score, reason: String },
}

impl ProbeOutcome {
    /// Last known score after the probe, carried into the next question.
    pub fn score(&self) -> Score {
        match self {
            ProbeOutcome::Locked { score, .. }
            | ProbeOutcome::Unsolved { score }
            | ProbeOutcome::Aborted { score, .. } => *score,
        }
    }
}

/// The platform awards exactly one point per correct answer, so a submission
/// is correct iff it moved the score from `before` to `before + 1`.
pub fn is_locked(before: Score, after: Score) -> bool {
    before.checked_add(1) == Some(after)
}

/// Tries `a`, `b`, `c`, `d` in order until one locks in.
pub async fn probe_question(
    api: &dyn QuizApi,
    token: &AccessToken,
    quiz_id: &RemoteId,
    question_id: &RemoteId,
    current_score: Score,
) -> ProbeOutcome {
    let mut score = current_score;

    for option in AnswerOption::ALL {
        match api.submit_answer(token, quiz_id, question_id, option).await {
            Ok(new_score) if is_locked(current_score, new_score) => {
                log::info!("Option {} locked for question {}", option, question_id);
                return ProbeOutcome::Locked {
                    option,
                    score: new_score,
                };
            }
            Ok(new_score) => score = new_score,
            Err(e) => {
                log::warn!(
                    "Error with quiz {}, question {}, stopping attempts: {}",
                    quiz_id,
                    question_id,
                    e
                );
                return ProbeOutcome::Aborted {
                    score,
                    reason: e.to_string(),
                };
            }
        }
    }

    log::warn!(
        "No option locked for question {} of quiz {} (score {} -> {})",
        question_id,
        quiz_id,
        current_score,
        score
    );
    ProbeOutcome::Unsolved { score }
}
