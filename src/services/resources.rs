//! Supplementary-resources service

use std::sync::Arc;

use reqwest::Method;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::NetworkError;
use crate::models::Resources;

pub struct ResourcesService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl ResourcesService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    /// Fetches the generated resources for a video, served from cache when
    /// fresh.
    ///
    /// A 404 means nothing has been generated yet, which is an expected
    /// outcome: it is returned as a normal value with `error` set instead
    /// of propagating the response error.
    pub async fn resources(&self, video_uuid: Uuid) -> Result<Resources, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let result = self
            .api
            .cached_request(
                &Endpoint::get_resources(video_uuid),
                Method::GET,
                None,
                Some(&token),
                false,
            )
            .await;

        match result {
            Err(NetworkError::InvalidResponse { status: Some(404) }) => {
                Ok(Resources::not_found("No resources found for this video"))
            }
            other => other,
        }
    }

    /// Requests resource generation for a video
    pub async fn generate_resources(&self, video_uuid: Uuid) -> Result<Resources, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&serde_json::json!({ "video_uuid": video_uuid }))
            .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request(
                &Endpoint::generate_resources(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }
}
