//! User service: profile reads, updates, and account deletion

use std::sync::Arc;

use reqwest::Method;

use crate::api::ApiClient;
use crate::auth::TokenProvider;
use crate::endpoints::Endpoint;
use crate::error::{EmptyResponse, NetworkError};
use crate::models::{ProfileUpdateRequest, User};

pub struct UserService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { api, tokens }
    }

    /// Fetches the current user's profile. Cache-eligible with the long
    /// profile TTL; profiles change rarely.
    pub async fn profile(&self) -> Result<User, NetworkError> {
        let token = self.tokens.bearer_token().await?;
        self.api
            .cached_request(
                &Endpoint::get_profile(),
                Method::GET,
                None,
                Some(&token),
                false,
            )
            .await
    }

    /// Updates the user's name, then invalidates the cached profile so the
    /// next read reflects the change
    pub async fn update_profile(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body = serde_json::to_vec(&ProfileUpdateRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
        .map_err(|e| NetworkError::Unknown(e.to_string()))?;
        let _: EmptyResponse = self
            .api
            .request(
                &Endpoint::update_profile(),
                Method::PATCH,
                Some(body),
                Some(&token),
            )
            .await?;
        self.api.invalidate(&Endpoint::get_profile());
        Ok(())
    }

    /// Deletes the account, then flushes the entire cache: every cached
    /// listing and artifact belonged to server state that no longer exists
    pub async fn delete_account(&self) -> Result<(), NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let _: EmptyResponse = self
            .api
            .request(
                &Endpoint::delete_user(),
                Method::DELETE,
                None,
                Some(&token),
            )
            .await?;
        self.api.invalidate_all();
        Ok(())
    }

    /// Clears local cached state on sign-out. The identity collaborator
    /// tears down the session; the next session must not see this one's
    /// responses.
    pub fn sign_out(&self) {
        self.api.invalidate_all();
    }
}
