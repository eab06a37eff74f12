//! Summary-chatbot service
//!
//! Chat replies are conversational and never cached; the raw body is
//! returned for the caller's markdown renderer.

use std::sync::Arc;

use reqwest::Method;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::NetworkError;
use crate::models::ChatMessageRequest;

pub struct ChatService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl ChatService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    /// Sends a question about a video's summary and returns the reply text
    pub async fn send_message(
        &self,
        question: &str,
        video_uuid: Uuid,
    ) -> Result<String, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&ChatMessageRequest {
            video_uuid: video_uuid.to_string(),
            user_message: question.to_string(),
        })
        .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request_raw(
                &Endpoint::summary_chatbot(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }
}
