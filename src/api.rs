//! Authenticated API client with a cache-aware request path
//!
//! The client offers two paths: `request`, which always goes to the
//! network, and `cached_request`, which consults the cache manager first
//! and writes successful GET responses back with the endpoint's policy TTL.
//! Caching is opt-in per call site; domain services pick the path whose
//! staleness trade-off fits the endpoint.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::cache::CacheManager;
use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::NetworkError;

/// HTTP client for the Owlpeer backend.
///
/// One instance is constructed at process start (wrapped in an `Arc`) and
/// injected into every domain service; it owns the cache manager for the
/// life of the process.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    cache: CacheManager,
}

impl ApiClient {
    /// Creates a client for the configured base URL, taking ownership of
    /// the cache manager.
    pub fn new(config: &ClientConfig, cache: CacheManager) -> Result<Self, NetworkError> {
        let base_url = Url::parse(&config.base_url).map_err(|_| NetworkError::InvalidUrl)?;
        Ok(Self {
            http: Client::new(),
            base_url,
            cache,
        })
    }

    /// The cache manager backing this client
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Performs a request and decodes the JSON response body into `T`.
    ///
    /// Always goes to the network. Non-2xx statuses map onto the error
    /// taxonomy (`ServerError` for 5xx, `InvalidResponse` otherwise, with
    /// `status: None` when no HTTP response was obtained at all); a 2xx
    /// body that does not match `T` is a `DecodingFailed`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        method: Method,
        body: Option<Vec<u8>>,
        token: Option<&str>,
    ) -> Result<T, NetworkError> {
        let text = self.send(endpoint, method, body, token).await?;
        serde_json::from_str(&text).map_err(|e| NetworkError::DecodingFailed(e.to_string()))
    }

    /// Performs a request and returns the response body verbatim.
    ///
    /// Used where the backend answers with plain text rather than a typed
    /// JSON shape (the summary chatbot).
    pub async fn request_raw(
        &self,
        endpoint: &Endpoint,
        method: Method,
        body: Option<Vec<u8>>,
        token: Option<&str>,
    ) -> Result<String, NetworkError> {
        self.send(endpoint, method, body, token).await
    }

    /// Cache-aware request path for idempotent reads.
    ///
    /// Mutating verbs delegate straight to [`ApiClient::request`] and never
    /// touch the cache. For GETs, a fresh cached entry is returned without
    /// network I/O unless `force_refresh` is set; on a miss the response is
    /// fetched, written back with the endpoint's policy TTL, and returned.
    /// Network and decode errors propagate unchanged; an expired entry is
    /// never served in their place.
    pub async fn cached_request<T>(
        &self,
        endpoint: &Endpoint,
        method: Method,
        body: Option<Vec<u8>>,
        token: Option<&str>,
        force_refresh: bool,
    ) -> Result<T, NetworkError>
    where
        T: Serialize + DeserializeOwned,
    {
        if method != Method::GET {
            return self.request(endpoint, method, body, token).await;
        }

        let key = CacheManager::cache_key(endpoint);

        if !force_refresh {
            if let Some(cached) = self.cache.get::<T>(&key) {
                debug!(key, "serving response from cache");
                return Ok(cached);
            }
        }

        let fresh: T = self.request(endpoint, Method::GET, body, token).await?;
        let ttl = CacheManager::expiration_policy(endpoint);
        self.cache.set(&fresh, &key, Some(ttl));
        Ok(fresh)
    }

    /// Removes the cached entry for exactly this endpoint.
    ///
    /// Called by services after a mutation that changed one known
    /// resource's server state.
    pub fn invalidate(&self, endpoint: &Endpoint) {
        self.cache.remove(&CacheManager::cache_key(endpoint));
    }

    /// Flushes the entire cache.
    ///
    /// Used on sign-out, subscription purchase, and account deletion, where
    /// enumerating affected endpoints individually would be error-prone.
    pub fn invalidate_all(&self) {
        self.cache.clear_all();
    }

    async fn send(
        &self,
        endpoint: &Endpoint,
        method: Method,
        body: Option<Vec<u8>>,
        token: Option<&str>,
    ) -> Result<String, NetworkError> {
        let url = self
            .base_url
            .join(&endpoint.full_path())
            .map_err(|_| NetworkError::InvalidUrl)?;

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|_| NetworkError::InvalidResponse { status: None })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::from_status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| NetworkError::Unknown(e.to_string()))
    }
}
