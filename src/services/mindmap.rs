//! Mind-map service
//!
//! Mind maps are fetched fresh on every view: generation can complete at
//! any moment after the user opens the tab, and a cached "not ready yet"
//! answer would hide the finished map.

use std::sync::Arc;

use reqwest::Method;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::NetworkError;
use crate::models::{MindMapRequest, MindMapResponse};

pub struct MindMapService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl MindMapService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    pub async fn mind_map(&self, video_uuid: Uuid) -> Result<MindMapResponse, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        self.api
            .request(
                &Endpoint::get_mind_map(video_uuid),
                Method::GET,
                None,
                Some(&token),
            )
            .await
    }

    pub async fn generate_mind_map(
        &self,
        video_uuid: Uuid,
    ) -> Result<MindMapResponse, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&MindMapRequest {
            video_uuid: video_uuid.to_string(),
        })
        .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request(
                &Endpoint::generate_mind_map(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }
}
