//! Video service: per-video detail, playlist listings, deletion

use std::sync::Arc;

use reqwest::Method;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::{EmptyResponse, NetworkError};
use crate::models::{Video, VideoList};

pub struct VideoService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl VideoService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    /// Fetches one video's details (summary, transcript), cache-eligible
    pub async fn video_details(&self, uuid: Uuid) -> Result<Video, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        self.api
            .cached_request(
                &Endpoint::video_details(uuid),
                Method::GET,
                None,
                Some(&token),
                false,
            )
            .await
    }

    /// Fetches the lightweight video listing for a playlist, always fresh
    pub async fn playlist_videos(&self, playlist_uuid: Uuid) -> Result<VideoList, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        self.api
            .request(
                &Endpoint::course_videos(playlist_uuid),
                Method::GET,
                None,
                Some(&token),
            )
            .await
    }

    /// Deletes a standalone video, then invalidates the course listing
    pub async fn delete_single_video(&self, uuid: Uuid) -> Result<(), NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let _: EmptyResponse = self
            .api
            .request(
                &Endpoint::delete_single_video(uuid),
                Method::DELETE,
                None,
                Some(&token),
            )
            .await?;
        self.api.invalidate(&Endpoint::my_courses());
        Ok(())
    }
}
