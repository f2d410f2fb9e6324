use serde::Serialize;

use crate::models::domain::RemoteId;

/// A topic of a unit that has an attemptable quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub topic_id: RemoteId,
    pub topic_name: String,
}

impl Topic {
    pub fn new(topic_id: impl Into<RemoteId>, topic_name: &str) -> Self {
        Topic {
            topic_id: topic_id.into(),
            topic_name: topic_name.to_string(),
        }
    }
}
