//! Billing service
//!
//! The payment provider SDK handles the purchase itself; this service only
//! reports completed purchases to the backend and answers entitlement
//! checks through the billing collaborator.

use std::sync::Arc;

use reqwest::Method;

use crate::api::ApiClient;
use crate::auth::{EntitlementProvider, TokenProvider};
use crate::endpoints::Endpoint;
use crate::error::{EmptyResponse, NetworkError};
use crate::models::PurchaseNotification;

pub struct BillingService {
    api: Arc<ApiClient>,
    tokens: Arc<dyn TokenProvider>,
    entitlements: Arc<dyn EntitlementProvider>,
}

impl BillingService {
    pub fn new(
        api: Arc<ApiClient>,
        tokens: Arc<dyn TokenProvider>,
        entitlements: Arc<dyn EntitlementProvider>,
    ) -> Self {
        Self {
            api,
            tokens,
            entitlements,
        }
    }

    /// Reports a completed store purchase to the backend, then flushes the
    /// cache: the new entitlement changes what many endpoints return
    pub async fn report_purchase(
        &self,
        notification: &PurchaseNotification,
    ) -> Result<(), NetworkError> {
        let token = self.tokens.bearer_token().await?;
        let body =
            serde_json::to_vec(notification).map_err(|e| NetworkError::Unknown(e.to_string()))?;
        let _: EmptyResponse = self
            .api
            .request(
                &Endpoint::upgrade_user(),
                Method::POST,
                Some(body),
                Some(&token),
            )
            .await?;
        self.api.invalidate_all();
        Ok(())
    }

    /// Whether the current session holds an active paid entitlement
    pub async fn is_entitled(&self) -> bool {
        self.entitlements.active_entitlement().await
    }
}
