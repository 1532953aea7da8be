//! Wire payloads sent to the order endpoints.

use crate::shared::{CourierId, OrderId};
use serde::{Deserialize, Serialize};

/// Body of `PUT /orders/courier`.
///
/// `courier_id: None` serializes as `null`, which the backend treats as
/// un-assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourierAssignment {
    pub id: OrderId,
    pub courier_id: Option<CourierId>,
}

impl CourierAssignment {
    pub fn new(id: OrderId, courier_id: Option<CourierId>) -> Self {
        Self { id, courier_id }
    }
}
