use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, ORIGIN, REFERER},
    Method, RequestBuilder,
};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{AccessToken, AnswerOption, QuizAttempt, RemoteId, Score, Topic},
        dto::upstream::{
            CreateQuizPayload, Envelope, QuizResultPayload, RemoteTopic, SaveAnswerBody,
            ScorePayload, SubmitQuizBody, TopicsPayload,
        },
    },
};

/// Gateway to the quiz platform. The credential is an explicit argument of
/// every call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Topics of a unit that carry an attemptable quiz, in server order.
    async fn list_unit_topics(&self, token: &AccessToken, unit_id: &str)
        -> AppResult<Vec<Topic>>;

    /// True iff the platform reports badge `1` for the topic's quiz result.
    async fn is_topic_completed(&self, token: &AccessToken, topic_id: &RemoteId)
        -> AppResult<bool>;

    async fn create_quiz_attempt(&self, token: &AccessToken, quiz_id: &RemoteId)
        -> AppResult<QuizAttempt>;

    /// Saves one answer and returns the quiz score right after it.
    async fn submit_answer(
        &self,
        token: &AccessToken,
        quiz_id: &RemoteId,
        question_id: &RemoteId,
        answer: AnswerOption,
    ) -> AppResult<Score>;

    async fn fetch_score(&self, token: &AccessToken, quiz_id: &RemoteId) -> AppResult<Score>;
}

pub struct HttpQuizApi {
    client: reqwest::Client,
    base_url: String,
    origin: String,
}

impl HttpQuizApi {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.api_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            origin: config.api_origin.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str, token: &AccessToken) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json, text/plain, */*")
            .header(AUTHORIZATION, token.expose())
            .header(ORIGIN, &self.origin)
            .header(REFERER, format!("{}/", self.origin))
    }

    async fn payload<T: DeserializeOwned>(request: RequestBuilder) -> AppResult<T> {
        let response = request.send().await?.error_for_status()?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.payload)
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn list_unit_topics(
        &self,
        token: &AccessToken,
        unit_id: &str,
    ) -> AppResult<Vec<Topic>> {
        let path = format!("/studentmaster/get-topics-unit/{}", unit_id);
        let payload: TopicsPayload = Self::payload(self.request(Method::GET, &path, token))
            .await
            .map_err(|e| {
                log::error!("Error fetching topics for unit {}: {}", unit_id, e);
                e
            })?;

        Ok(payload
            .topics
            .into_iter()
            .filter_map(RemoteTopic::into_topic)
            .collect())
    }

    async fn is_topic_completed(
        &self,
        token: &AccessToken,
        topic_id: &RemoteId,
    ) -> AppResult<bool> {
        let path = format!("/quizattempts/quiz-result/{}", topic_id);
        let payload: QuizResultPayload = Self::payload(self.request(Method::GET, &path, token))
            .await
            .map_err(|e| {
                log::error!("Error fetching quiz result for topic {}: {}", topic_id, e);
                e
            })?;

        Ok(payload.is_completed())
    }

    async fn create_quiz_attempt(
        &self,
        token: &AccessToken,
        quiz_id: &RemoteId,
    ) -> AppResult<QuizAttempt> {
        let path = format!("/quizattempts/create-quiz/{}", quiz_id);
        let payload: CreateQuizPayload = Self::payload(self.request(Method::GET, &path, token))
            .await
            .map_err(|e| {
                log::error!("Error creating quiz {}: {}", quiz_id, e);
                e
            })?;

        Ok(payload.into())
    }

    async fn submit_answer(
        &self,
        token: &AccessToken,
        quiz_id: &RemoteId,
        question_id: &RemoteId,
        answer: AnswerOption,
    ) -> AppResult<Score> {
        let body = SaveAnswerBody {
            quiz_id,
            question_id,
            user_answer: answer.as_str(),
        };

        self.request(
            Method::POST,
            "/quizquestionattempts/save-user-quiz-answer",
            token,
        )
        .json(&body)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| {
            log::error!(
                "Error attempting quiz {}, question {}: {}",
                quiz_id,
                question_id,
                e
            );
            AppError::from(e)
        })?;

        self.fetch_score(token, quiz_id).await
    }

    async fn fetch_score(&self, token: &AccessToken, quiz_id: &RemoteId) -> AppResult<Score> {
        let request = self
            .request(Method::POST, "/quizattempts/submit-quiz", token)
            .json(&SubmitQuizBody { quiz_id });

        let payload: ScorePayload = Self::payload(request).await.map_err(|e| {
            log::error!("Error submitting quiz {}: {}", quiz_id, e);
            e
        })?;

        Ok(payload.score)
    }
}
