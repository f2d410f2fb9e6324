//! Wire shapes of the quiz platform API.
//!
//! Every response is wrapped as `{ "payload": { ... } }`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::domain::{Question, QuizAttempt, RemoteId, Score, Topic};

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub payload: T,
}

#[derive(Debug, Deserialize)]
pub struct TopicsPayload {
    pub topics: Vec<RemoteTopic>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTopic {
    pub id: RemoteId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub content_flag: bool,
}

impl RemoteTopic {
    /// `None` when the topic carries no attemptable quiz.
    pub fn into_topic(self) -> Option<Topic> {
        self.content_flag.then(|| Topic {
            topic_id: self.id,
            topic_name: self.name,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizResultPayload {
    #[serde(default)]
    pub badge: Option<serde_json::Value>,
}

impl QuizResultPayload {
    /// Only the number one marks a finished quiz; strings and booleans do not.
    pub fn is_completed(&self) -> bool {
        self.badge
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .is_some_and(|badge| badge == 1.0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizPayload {
    pub quiz_id: RemoteId,
    pub questions: Vec<RemoteQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteQuestion {
    pub question_id: RemoteId,
}

impl From<CreateQuizPayload> for QuizAttempt {
    fn from(payload: CreateQuizPayload) -> Self {
        QuizAttempt {
            quiz_id: payload.quiz_id,
            questions: payload
                .questions
                .into_iter()
                .map(|q| Question {
                    question_id: q.question_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScorePayload {
    pub score: Score,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnswerBody<'a> {
    pub quiz_id: &'a RemoteId,
    pub question_id: &'a RemoteId,
    pub user_answer: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizBody<'a> {
    pub quiz_id: &'a RemoteId,
}

/// Reads a flag the way the platform's own web client does: `true`, non-zero
/// numbers and non-empty strings are set, anything else is not.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    })
}
