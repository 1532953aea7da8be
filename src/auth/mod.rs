//! Authentication — the authorization-header collaborator.
//!
//! Every order request asks an [`AuthHeader`] for a header-name → value map and
//! merges it into the outgoing request. How tokens are obtained or refreshed is
//! up to the implementor; the SDK only reads them.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Produces the authorization headers for one request.
pub trait AuthHeader: Send + Sync {
    fn headers(&self) -> HashMap<String, String>;
}

impl<F> AuthHeader for F
where
    F: Fn() -> HashMap<String, String> + Send + Sync,
{
    fn headers(&self) -> HashMap<String, String> {
        self()
    }
}

/// Sends no authorization headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl AuthHeader for NoAuth {
    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// `Authorization: Bearer <token>` when a token is set, nothing otherwise.
///
/// Clones share the token, so the app can keep a handle and swap the token
/// after login/logout without rebuilding the client.
#[derive(Clone, Default)]
pub struct BearerToken {
    token: Arc<RwLock<Option<String>>>,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// A provider with no token yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }

    pub fn is_set(&self) -> bool {
        self.token.read().is_some()
    }
}

// The token itself never shows up in logs.
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken")
            .field("is_set", &self.is_set())
            .finish()
    }
}

impl AuthHeader for BearerToken {
    fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        if let Some(token) = self.token.read().as_ref() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_auth_is_empty() {
        assert!(NoAuth.headers().is_empty());
    }

    #[test]
    fn test_bearer_token_header() {
        let auth = BearerToken::new("abc");
        let headers = auth.headers();
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer abc"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_bearer_token_swap_and_clear_through_clone() {
        let auth = BearerToken::empty();
        let handle = auth.clone();
        assert!(auth.headers().is_empty());

        handle.set("fresh");
        assert_eq!(auth.headers()["Authorization"], "Bearer fresh");

        handle.clear();
        assert!(auth.headers().is_empty());
    }

    #[test]
    fn test_bearer_token_debug_hides_token() {
        let rendered = format!("{:?}", BearerToken::new("secret"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_closure_provider() {
        let provider = || HashMap::from([("X-Api-Key".to_string(), "k".to_string())]);
        assert_eq!(provider.headers()["X-Api-Key"], "k");
    }
}
