//! Quiz service: fetching, generating, submitting, and explaining quizzes
//!
//! Quiz state is interactive (submissions, partial progress), so nothing
//! here is cached; every call goes to the network.

use std::sync::Arc;

use reqwest::Method;
use thiserror::Error;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::NetworkError;
use crate::models::{
    QuizExplanationRequest, QuizExplanationResponse, QuizResponse, QuizSubmissionRequest,
    QuizSubmissionResponse,
};

/// Errors surfaced by the quiz service
#[derive(Debug, Error)]
pub enum QuizError {
    /// No quiz has been generated for this video yet
    #[error("No quiz exists for this video")]
    NotFound,

    /// Any underlying network or decode failure
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Whether a response body is the backend's "quiz not found" message.
///
/// The backend answers this case with 200 and a message field rather than a
/// 404, so it has to be detected from the body before decoding.
fn is_quiz_not_found(raw: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(|m| m.to_lowercase().contains("quiz not found"))
        })
        .unwrap_or(false)
}

pub struct QuizService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl QuizService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    /// Fetches the quiz for a video, translating the backend's not-found
    /// message into [`QuizError::NotFound`]
    pub async fn quiz(&self, video_uuid: Uuid) -> Result<QuizResponse, QuizError> {
        let token = self.tokens.bearer_token().await?;
        let raw = self
            .api
            .request_raw(
                &Endpoint::get_quiz(video_uuid),
                Method::GET,
                None,
                Some(&token),
            )
            .await?;

        if is_quiz_not_found(&raw) {
            return Err(QuizError::NotFound);
        }
        serde_json::from_str(&raw)
            .map_err(|e| QuizError::Network(NetworkError::DecodingFailed(e.to_string())))
    }

    /// Requests quiz generation for a video
    pub async fn generate_quiz(&self, video_uuid: Uuid) -> Result<QuizResponse, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&serde_json::json!({ "video_uuid": video_uuid }))
            .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request(
                &Endpoint::generate_quiz(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }

    /// Submits the user's answers for scoring
    pub async fn submit_quiz(
        &self,
        video_uuid: Uuid,
        answers: Vec<i32>,
    ) -> Result<QuizSubmissionResponse, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&QuizSubmissionRequest {
            video_uuid: video_uuid.to_string(),
            user_answers: answers,
        })
        .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request(
                &Endpoint::submit_quiz(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }

    /// Requests an explanation of one answered question
    pub async fn explain(
        &self,
        request: QuizExplanationRequest,
    ) -> Result<QuizExplanationResponse, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body =
            serde_json::to_vec(&request).map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request(
                &Endpoint::explain_quiz(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }
}
