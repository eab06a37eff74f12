//! Flashcard service

use std::sync::Arc;

use reqwest::Method;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::NetworkError;
use crate::models::{FlashcardRequest, FlashcardSet};

pub struct FlashcardService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl FlashcardService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    /// Fetches the flashcards for a video, served from cache when fresh
    pub async fn flashcards(&self, video_uuid: Uuid) -> Result<FlashcardSet, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        self.api
            .cached_request(
                &Endpoint::get_flashcards(video_uuid),
                Method::GET,
                None,
                Some(&token),
                false,
            )
            .await
    }

    /// Requests flashcard generation for a video
    pub async fn generate_flashcards(
        &self,
        video_uuid: Uuid,
    ) -> Result<FlashcardSet, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&FlashcardRequest {
            video_uuid: video_uuid.to_string(),
        })
        .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request(
                &Endpoint::generate_flashcards(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }
}
