//! HTTP layer — the `Transport` seam, `DeliveryHttp` and retry policies.
//!
//! The order sub-client talks to a [`Transport`] and never to reqwest directly:
//! it builds an [`ApiRequest`] with a path relative to the API base URL and gets
//! back the raw JSON body. Decoding into domain types happens one layer up.

#[cfg(feature = "http")]
pub mod client;
pub mod retry;

#[cfg(feature = "http")]
pub use client::DeliveryHttp;
pub use retry::{RetryConfig, RetryPolicy};

use crate::error::HttpError;
use async_trait::async_trait;
use std::collections::HashMap;

/// HTTP verbs used by the order API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the order API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Relative to the base URL, starting with `/`.
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            headers: HashMap::new(),
            body: Some(body),
        }
    }

    /// Merge headers into the request; later values win on name clashes.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// Executes one [`ApiRequest`] and returns the JSON body of a 2xx response.
///
/// Non-2xx statuses and transport failures come back as [`HttpError`]. An empty
/// 2xx body is `serde_json::Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_headers_merges() {
        let req = ApiRequest::get("/orders/1")
            .with_headers(HashMap::from([("A".to_string(), "1".to_string())]))
            .with_headers(HashMap::from([("A".to_string(), "2".to_string())]));
        assert_eq!(req.headers["A"], "2");
        assert_eq!(req.method, Method::Get);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_put_carries_body() {
        let req = ApiRequest::put("/orders", serde_json::json!({ "id": 1 }));
        assert_eq!(req.method.to_string(), "PUT");
        assert_eq!(req.body, Some(serde_json::json!({ "id": 1 })));
    }
}
