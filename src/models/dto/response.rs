use serde::Serialize;

use crate::services::solver_service::BatchSummary;

pub const SUBMISSION_COMPLETE: &str = "Submission complete";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub logs: Vec<String>,
    pub message: String,
    pub topics_count: usize,
    pub processed_topics: usize,
    pub skipped_topics: usize,
}

impl From<BatchSummary> for SolveResponse {
    fn from(summary: BatchSummary) -> Self {
        SolveResponse {
            logs: summary.logs,
            message: SUBMISSION_COMPLETE.to_string(),
            topics_count: summary.topics_count,
            processed_topics: summary.processed_topics,
            skipped_topics: summary.skipped_topics,
        }
    }
}
