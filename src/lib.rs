//! # Delivery SDK
//!
//! A Rust client for the delivery order-management API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Id newtypes, the order domain model, the observable order store
//! 2. **Auth** — The authorization-header collaborator merged into every request
//! 3. **HTTP API** — `Transport` seam, `DeliveryHttp` (reqwest) with retry policies
//! 4. **High-Level Client** — `DeliveryClient` with the `orders()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use delivery_sdk::prelude::*;
//!
//! let client = DeliveryClient::builder()
//!     .base_url("https://delivery.example.com/api")
//!     .bearer_token("eyJhbGciOi...")
//!     .build()?;
//!
//! let mut events = client.store().subscribe();
//! let order = client.orders().get_order_by_id(OrderId::new(7)).await?;
//! assert_eq!(client.store().current_order(), Some(order));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared id newtypes.
pub mod shared;

/// Domain modules: types, wire payloads, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Default URLs and environment variable names.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authorization header providers.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Transport seam, reqwest client and retry policies.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DeliveryClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::{CourierId, OrderId};

    pub use crate::domain::order::state::{OrderStore, OrderStoreEvent, OrderStoreState};
    pub use crate::domain::order::wire::CourierAssignment;
    pub use crate::domain::order::{DishOrder, Order, Phone};

    pub use crate::error::{HttpError, SdkError};

    pub use crate::network::DEFAULT_API_URL;

    pub use crate::auth::{AuthHeader, BearerToken, NoAuth};

    pub use crate::client::{DeliveryClient, DeliveryClientBuilder, OrdersClient};
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    pub use crate::http::{ApiRequest, Method, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::DeliveryHttp;
}
