//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (the records the backend owns)
//! - `wire.rs` — Request payloads sent to the backend
//! - `state.rs` — Observable state containers updated from HTTP responses
//! - `client.rs` — Sub-client with HTTP methods

pub mod order;
