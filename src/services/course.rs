//! Course service: creating, listing, and deleting courses

use std::sync::Arc;

use reqwest::Method;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::{EmptyResponse, NetworkError};
use crate::models::{CreateCourseRequest, CreateCourseResponse, MyCoursesWrapper, Playlist};

pub struct CourseService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl CourseService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    /// Fetches the user's courses, served from cache when fresh
    pub async fn my_courses(&self, force_refresh: bool) -> Result<MyCoursesWrapper, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        self.api
            .cached_request(
                &Endpoint::my_courses(),
                Method::GET,
                None,
                Some(&token),
                force_refresh,
            )
            .await
    }

    /// Submits a video or playlist URL for course generation
    pub async fn create_course(&self, url: &str) -> Result<CreateCourseResponse, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&CreateCourseRequest {
            url: url.to_string(),
        })
        .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        self.api
            .request(
                &Endpoint::create_course(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await
    }

    /// Fetches one playlist's details. Always fetched fresh: detail views
    /// follow course generation closely, where staleness costs more than
    /// the round-trip.
    pub async fn course_details(&self, uuid: Uuid) -> Result<Playlist, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        self.api
            .request(
                &Endpoint::course_details(uuid),
                Method::GET,
                None,
                Some(&token),
            )
            .await
    }

    /// Deletes a course, then invalidates the cached course listing it
    /// appeared in
    pub async fn delete_course(&self, uuid: Uuid) -> Result<(), NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let _: EmptyResponse = self
            .api
            .request(
                &Endpoint::delete_course(uuid),
                Method::DELETE,
                None,
                Some(&token),
            )
            .await?;
        self.api.invalidate(&Endpoint::my_courses());
        Ok(())
    }
}
