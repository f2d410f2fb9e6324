pub mod credential;
pub mod quiz_attempt;
pub mod remote_id;
pub mod topic;
pub use credential::AccessToken;
pub use quiz_attempt::{AnswerOption, Question, QuizAttempt, Score};
pub use remote_id::RemoteId;
pub use topic::Topic;
