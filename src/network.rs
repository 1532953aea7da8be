//! Network defaults for the delivery SDK.

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "DELIVERY_API_URL";

/// Environment variable holding a bearer token for the `Authorization` header.
pub const ENV_API_TOKEN: &str = "DELIVERY_API_TOKEN";
