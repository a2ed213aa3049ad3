//! Typed operations of the interview service
//!
//! [`InterviewApi`] is the seam the session controller talks to.
//! [`HttpInterviewApi`] maps each operation onto one endpoint and adds
//! nothing but the retry policy and response validation.

use super::client::ApiClient;
use super::retry::{OperationKind, RetryPolicy};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    AnswerRequest, Feedback, InterviewSession, InterviewSummary, QuestionResponse,
    StartInterviewRequest,
};

use async_trait::async_trait;

/// Path of the start endpoint
pub const START_PATH: &str = "/api/interview/start";
/// Path of the question endpoint
pub const QUESTION_PATH: &str = "/api/interview/question";
/// Path of the answer endpoint
pub const ANSWER_PATH: &str = "/api/interview/answer";
/// Path of the end endpoint
pub const END_PATH: &str = "/api/interview/end";

/// Operations offered by the interview service
#[async_trait]
pub trait InterviewApi: Send + Sync {
    /// Create a new interview session
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the response has the wrong shape
    async fn start_interview(&self, request: &StartInterviewRequest) -> Result<InterviewSession>;

    /// Fetch the current question and progress for a session
    async fn get_question(&self, interview_id: &str) -> Result<QuestionResponse>;

    /// Submit an answer and receive its evaluation
    ///
    /// # Errors
    ///
    /// Returns a decode error if the feedback score is out of range
    async fn submit_answer(&self, request: &AnswerRequest) -> Result<Feedback>;

    /// Finish a session and receive the final tally
    async fn end_interview(&self, interview_id: &str) -> Result<InterviewSummary>;

    /// Describe the service
    ///
    /// The default implementation reports that the backend has no info endpoint.
    async fn api_info(&self) -> Result<serde_json::Value> {
        Err(crate::error::InterviewerError::Request(
            "Service info is not available from this backend".to_string(),
        )
        .into())
    }
}

/// HTTP implementation of [`InterviewApi`]
#[derive(Debug, Clone)]
pub struct HttpInterviewApi {
    client: ApiClient,
    retry: RetryPolicy,
}

impl HttpInterviewApi {
    /// Wrap an existing client
    pub fn new(client: ApiClient, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Build client and retry policy from configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::api::HttpInterviewApi;
    /// use interviewer::config::Config;
    ///
    /// let api = HttpInterviewApi::from_config(&Config::default()).unwrap();
    /// assert_eq!(api.client().base_url(), "http://localhost:8000");
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self::new(client, RetryPolicy::from_config(&config.retry)))
    }

    /// Underlying HTTP adapter
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl InterviewApi for HttpInterviewApi {
    async fn start_interview(&self, request: &StartInterviewRequest) -> Result<InterviewSession> {
        tracing::debug!(
            "Starting interview: topic={}, difficulty={}, questions={}",
            request.topic,
            request.difficulty,
            request.question_count
        );
        self.retry
            .run(OperationKind::Mutation, "start_interview", || {
                self.client.post(START_PATH, request)
            })
            .await
    }

    async fn get_question(&self, interview_id: &str) -> Result<QuestionResponse> {
        let query = [("interview_id", interview_id)];
        self.retry
            .run(OperationKind::Read, "get_question", || {
                self.client.get(QUESTION_PATH, &query)
            })
            .await
    }

    async fn submit_answer(&self, request: &AnswerRequest) -> Result<Feedback> {
        let feedback: Feedback = self
            .retry
            .run(OperationKind::Mutation, "submit_answer", || {
                self.client.post(ANSWER_PATH, request)
            })
            .await?;
        feedback.validate().map_err(|e| {
            tracing::error!("Rejected feedback: {}", e);
            e
        })?;
        Ok(feedback)
    }

    async fn end_interview(&self, interview_id: &str) -> Result<InterviewSummary> {
        let query = [("interview_id", interview_id)];
        self.retry
            .run(OperationKind::Mutation, "end_interview", || {
                self.client.post_empty(END_PATH, &query)
            })
            .await
    }

    async fn api_info(&self) -> Result<serde_json::Value> {
        self.retry
            .run(OperationKind::Read, "api_info", || self.client.get("/", &[]))
            .await
    }
}
