use serde::Serialize;

use crate::{
    errors::AppResult,
    models::domain::{AccessToken, RemoteId, Score},
    services::{
        answer_prober::{probe_question, ProbeOutcome},
        quiz_api::QuizApi,
    },
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRunResult {
    pub quiz_id: RemoteId,
    pub final_score: Score,
    pub locked: usize,
    pub unsolved: usize,
    pub aborted: usize,
}

/// Creates an attempt for `topic_id` and probes every question in order,
/// carrying the running score from one question to the next.
///
/// Failing to create the attempt is an error; a failure while probing only
/// gives up on that question.
pub async fn run_quiz(
    api: &dyn QuizApi,
    token: &AccessToken,
    topic_id: &RemoteId,
) -> AppResult<QuizRunResult> {
    let attempt = api.create_quiz_attempt(token, topic_id).await?;

    let mut result = QuizRunResult {
        quiz_id: attempt.quiz_id,
        final_score: 0,
        locked: 0,
        unsolved: 0,
        aborted: 0,
    };

    for question in &attempt.questions {
        let outcome = probe_question(
            api,
            token,
            &result.quiz_id,
            &question.question_id,
            result.final_score,
        )
        .await;

        match outcome {
            ProbeOutcome::Locked { .. } => result.locked += 1,
            ProbeOutcome::Unsolved { .. } => result.unsolved += 1,
            ProbeOutcome::Aborted { .. } => result.aborted += 1,
        }
        result.final_score = outcome.score();
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::domain::AnswerOption;
    use crate::services::quiz_api::MockQuizApi;
    use crate::test_utils::fixtures::quiz_attempt;
    use mockall::predicate::eq;

    #[actix_web::test]
    async fn test_running_score_is_carried_between_questions() {
        let token = AccessToken::new("token");
        let mut api = MockQuizApi::new();

        api.expect_create_quiz_attempt()
            .with(mockall::predicate::always(), eq(RemoteId::Number(11)))
            .times(1)
            .returning(|_, _| Ok(quiz_attempt(900, &[1, 2])));

        // question 1: `a` is correct (0 -> 1); question 2: `c` is correct (1 -> 2)
        api.expect_submit_answer()
            .returning(|_, _, question_id, answer| {
                Ok(match (question_id, answer) {
                    (RemoteId::Number(1), AnswerOption::A) => 1,
                    (RemoteId::Number(1), _) => 0,
                    (RemoteId::Number(2), AnswerOption::C) => 2,
                    _ => 1,
                })
            });

        let result = run_quiz(&api, &token, &RemoteId::Number(11)).await.unwrap();

        assert_eq!(result.quiz_id, RemoteId::Number(900));
        assert_eq!(result.final_score, 2);
        assert_eq!(result.locked, 2);
        assert_eq!(result.unsolved, 0);
    }

    #[actix_web::test]
    async fn test_aborted_question_does_not_stop_the_quiz() {
        let token = AccessToken::new("token");
        let mut api = MockQuizApi::new();

        api.expect_create_quiz_attempt()
            .returning(|_, _| Ok(quiz_attempt(900, &[1, 2])));
        api.expect_submit_answer()
            .returning(|_, _, question_id, _| match question_id {
                RemoteId::Number(1) => Err(AppError::Upstream("reset".into())),
                _ => Ok(1),
            });

        let result = run_quiz(&api, &token, &RemoteId::Number(11)).await.unwrap();

        assert_eq!(result.aborted, 1);
        assert_eq!(result.locked, 1);
        assert_eq!(result.final_score, 1);
    }

    #[actix_web::test]
    async fn test_create_attempt_failure_propagates() {
        let token = AccessToken::new("token");
        let mut api = MockQuizApi::new();

        api.expect_create_quiz_attempt()
            .returning(|_, _| Err(AppError::Upstream("401 Unauthorized".into())));
        api.expect_submit_answer().never();

        let err = run_quiz(&api, &token, &RemoteId::Number(11)).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[actix_web::test]
    async fn test_quiz_without_questions_scores_zero() {
        let token = AccessToken::new("token");
        let mut api = MockQuizApi::new();

        api.expect_create_quiz_attempt()
            .returning(|_, _| Ok(quiz_attempt(900, &[])));

        let result = run_quiz(&api, &token, &RemoteId::Number(11)).await.unwrap();
        assert_eq!(result.final_score, 0);
        assert_eq!(result.locked, 0);
    }
}
