//! High-level client — `DeliveryClient` with nested sub-client accessors.
//!
//! The order sub-client lives in `domain/order/client.rs`. This module keeps the
//! builder, the shared store handle and the accessor methods.

use crate::auth::{AuthHeader, BearerToken, NoAuth};
use crate::domain::order::client::Orders;
use crate::domain::order::OrderStore;
use crate::error::SdkError;
use crate::http::{RetryPolicy, Transport};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the delivery SDK.
///
/// Cheap to clone; clones share the transport, the auth provider and the store.
#[derive(Clone)]
pub struct DeliveryClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) auth: Arc<dyn AuthHeader>,
    pub(crate) store: OrderStore,
}

impl DeliveryClient {
    pub fn builder() -> DeliveryClientBuilder {
        DeliveryClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    /// The order store this client writes to.
    pub fn store(&self) -> &OrderStore {
        &self.store
    }
}

impl std::fmt::Debug for DeliveryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryClient")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DeliveryClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    retry_policy: RetryPolicy,
    auth: Option<Arc<dyn AuthHeader>>,
    store: Option<OrderStore>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for DeliveryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            retry_policy: RetryPolicy::None,
            auth: None,
            store: None,
            transport: None,
        }
    }
}

impl DeliveryClientBuilder {
    /// Start from `DELIVERY_API_URL` / `DELIVERY_API_TOKEN`, falling back to
    /// the defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Some(url) = env_non_empty(crate::network::ENV_API_URL) {
            builder.base_url = url;
        }
        if let Some(token) = env_non_empty(crate::network::ENV_API_TOKEN) {
            builder = builder.bearer_token(token);
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Whole-request timeout. Unset keeps the HTTP client's default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Authorization header provider consulted on every request.
    pub fn auth(mut self, auth: impl AuthHeader + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Shorthand for `auth(BearerToken::new(token))`.
    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.auth(BearerToken::new(token))
    }

    /// Write into an existing store instead of a fresh one.
    pub fn store(mut self, store: OrderStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a custom transport. `base_url`, `timeout` and `retry_policy` are
    /// ignored when set.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<DeliveryClient, SdkError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(&self.base_url, self.timeout, self.retry_policy)?,
        };

        Ok(DeliveryClient {
            transport,
            auth: self
                .auth
                .unwrap_or_else(|| Arc::new(NoAuth) as Arc<dyn AuthHeader>),
            store: self.store.unwrap_or_default(),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(
    base_url: &str,
    timeout: Option<Duration>,
    retry: RetryPolicy,
) -> Result<Arc<dyn Transport>, SdkError> {
    validate_base_url(base_url)?;
    let http = crate::http::DeliveryHttp::new(base_url, timeout, retry)?;
    Ok(Arc::new(http))
}

#[cfg(not(feature = "http"))]
fn default_transport(
    _base_url: &str,
    _timeout: Option<Duration>,
    _retry: RetryPolicy,
) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Config(
        "no transport configured and the `http` feature is disabled".to_string(),
    ))
}

#[cfg_attr(not(feature = "http"), allow(dead_code))]
fn validate_base_url(url: &str) -> Result<(), SdkError> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| SdkError::Config(format!("base URL must start with http:// or https://: {url:?}")))?;
    if rest.trim_matches('/').is_empty() {
        return Err(SdkError::Config(format!("base URL has no host: {url:?}")));
    }
    Ok(())
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://localhost:8080").is_ok());
        assert!(validate_base_url("https://delivery.example.com/api/").is_ok());
        assert!(matches!(validate_base_url("localhost:8080"), Err(SdkError::Config(_))));
        assert!(matches!(validate_base_url("https://"), Err(SdkError::Config(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_build_with_defaults() {
        let client = DeliveryClient::builder().build().unwrap();
        assert_eq!(client.store().current_order(), None);
        assert!(client.auth.headers().is_empty());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_build_rejects_bad_url() {
        let err = DeliveryClient::builder().base_url("ftp://x").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_bearer_token_shorthand() {
        let client = DeliveryClient::builder().bearer_token("t0k").build().unwrap();
        assert_eq!(client.auth.headers()["Authorization"], "Bearer t0k");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_injected_store_is_shared() {
        let store = OrderStore::new();
        let client = DeliveryClient::builder().store(store.clone()).build().unwrap();
        client.store().set_all_orders(vec![]);
        let mut rx = store.subscribe();
        client.store().set_current_order(None);
        assert!(rx.try_recv().is_ok());
    }
}
