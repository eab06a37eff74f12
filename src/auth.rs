//! Collaborator seams for identity and billing
//!
//! The identity provider (session tokens) and the billing provider
//! (entitlements) are external SDKs; the client core consumes them only
//! through these two narrow traits.

use async_trait::async_trait;

use crate::error::NetworkError;

/// Issues bearer tokens for the current session
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a bearer token for the current session, or
    /// [`NetworkError::Unauthorized`] when no valid session exists.
    async fn bearer_token(&self) -> Result<String, NetworkError>;
}

/// Reports the billing state of the current session
#[async_trait]
pub trait EntitlementProvider: Send + Sync {
    /// Whether the current session has an active paid entitlement
    async fn active_entitlement(&self) -> bool;
}

/// Token provider holding a fixed token. Intended for tests and for wiring
/// flows where the token is refreshed outside the client core.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// A provider with no session; every request fails `Unauthorized`
    pub fn signed_out() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, NetworkError> {
        self.token.clone().ok_or(NetworkError::Unauthorized)
    }
}
