//! Low-level HTTP client — `DeliveryHttp`.
//!
//! reqwest-backed [`Transport`]. Knows nothing about orders: it resolves the
//! request path against the base URL, applies the retry policy and maps
//! statuses to [`HttpError`].

use crate::error::{HttpError, SdkError};
use crate::http::retry::RetryPolicy;
use crate::http::{ApiRequest, Method, Transport};

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the delivery REST API.
#[derive(Clone)]
pub struct DeliveryHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl DeliveryHttp {
    /// Build a client. `timeout: None` keeps reqwest's defaults.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        retry: RetryPolicy,
    ) -> Result<Self, SdkError> {
        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SdkError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_with_retry(
        &self,
        request: &ApiRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}{}", self.base_url, request.path);

        let Some(config) = self.retry.config_for(request.method) else {
            return self.do_request(&url, request).await;
        };

        let mut attempt = 0;
        loop {
            let err = match self.do_request(&url, request).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            let should_retry = match &err {
                HttpError::ServerError { status, .. } => config.retryable_statuses.contains(status),
                HttpError::RateLimited { .. } => config.retryable_statuses.contains(&429),
                HttpError::Timeout => true,
                HttpError::Reqwest(re) => re.is_connect() || re.is_request(),
                _ => false,
            };
            // Not retryable or out of attempts: the last error, as is.
            if !should_retry || attempt >= config.max_retries {
                return Err(err);
            }

            let delay = match &err {
                HttpError::RateLimited {
                    retry_after_ms: Some(ms),
                } => Duration::from_millis(*ms).min(config.max_delay),
                _ => config.delay_for_attempt(attempt),
            };
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying {} {}",
                request.method,
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request(
        &self,
        url: &str,
        request: &ApiRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
        };
        let mut req = self.client.request(method, url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(map_transport_error)?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await.map_err(map_transport_error)?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(serde_json::Value::Null);
            }
            return serde_json::from_slice(&bytes).map_err(HttpError::Decode);
        }

        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs.saturating_mul(1000));
        let body_text = resp.text().await.unwrap_or_default();

        match HttpError::from_status(status.as_u16(), body_text) {
            HttpError::RateLimited { .. } => Err(HttpError::RateLimited { retry_after_ms }),
            other => Err(other),
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

#[async_trait]
impl Transport for DeliveryHttp {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, HttpError> {
        self.request_with_retry(&request).await
    }
}

impl std::fmt::Debug for DeliveryHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryHttp")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}
