use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::AccessToken,
    services::{
        quiz_api::QuizApi,
        quiz_runner::{run_quiz, QuizRunResult},
    },
};

/// Upper bound on the number of topics actually solved in one run.
/// Zero means no bound. Topics skipped as already completed do not count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TopicCap(u32);

impl TopicCap {
    pub fn new(limit: u32) -> Self {
        TopicCap(limit)
    }

    pub fn is_unlimited(&self) -> bool {
        self.0 == 0
    }

    pub fn is_reached(&self, processed: usize) -> bool {
        !self.is_unlimited() && processed >= self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolvePlan {
    pub unit_ids: Vec<String>,
    pub cap: TopicCap,
}

impl SolvePlan {
    pub fn new(unit_ids: &str, cap: TopicCap) -> Self {
        SolvePlan {
            unit_ids: unit_ids.split_whitespace().map(str::to_string).collect(),
            cap,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Attemptable topics across every unit that was fetched, regardless of
    /// the cap.
    pub topics_count: usize,
    pub processed_topics: usize,
    pub skipped_topics: usize,
    pub quizzes: Vec<QuizRunResult>,
    pub logs: Vec<String>,
}

impl BatchSummary {
    fn record(&mut self, line: String) {
        log::info!("{}", line);
        self.logs.push(line);
    }
}

pub struct SolverService {
    api: Arc<dyn QuizApi>,
}

impl SolverService {
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Walks the units in order and solves every incomplete topic until the
    /// cap is reached. Any upstream failure outside answer probing ends the
    /// run; quizzes already submitted stay submitted.
    pub async fn solve(&self, token: &AccessToken, plan: &SolvePlan) -> AppResult<BatchSummary> {
        let mut summary = BatchSummary::default();

        'units: for unit_id in &plan.unit_ids {
            if plan.cap.is_reached(summary.processed_topics) {
                break;
            }

            let topics = self.api.list_unit_topics(token, unit_id).await?;
            summary.topics_count += topics.len();

            for topic in topics {
                if plan.cap.is_reached(summary.processed_topics) {
                    break 'units;
                }

                summary.record(format!("{}: {}", topic.topic_id, topic.topic_name));

                if self.api.is_topic_completed(token, &topic.topic_id).await? {
                    summary.record(format!("Quiz with id {} is already done!", topic.topic_id));
                    summary.skipped_topics += 1;
                    continue;
                }

                log::info!("Solving quiz {}", topic.topic_id);
                let result = run_quiz(self.api.as_ref(), token, &topic.topic_id).await?;
                summary.record(format!(
                    "Quiz {} is finished with score {} ({} locked, {} unsolved, {} aborted).",
                    topic.topic_id, result.final_score, result.locked, result.unsolved, result.aborted
                ));

                summary.quizzes.push(result);
                summary.processed_topics += 1;
            }
        }

        Ok(summary)
    }
}
