//! Order domain — delivery orders, courier assignment, the order store.

pub mod client;
pub mod state;
pub mod wire;

use crate::shared::serde_util;
use crate::shared::{CourierId, OrderId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use state::{OrderStore, OrderStoreEvent, OrderStoreState};
pub use wire::CourierAssignment;

// ─── DishOrder ───────────────────────────────────────────────────────────────

/// A line item of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishOrder {
    pub order_id: OrderId,
    pub dish_id: i64,
    pub dish_name: String,
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// Client phone as the backend sends it: a bare number or free text such as
/// `"+7 999 000-11-22"`. Serializes back in the shape it arrived in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Phone {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phone::Number(n) => write!(f, "{}", n),
            Phone::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Phone {
    fn from(n: i64) -> Self {
        Phone::Number(n)
    }
}

impl From<String> for Phone {
    fn from(s: String) -> Self {
        Phone::Text(s)
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A delivery order as the backend returns it.
///
/// Identity is `id`; every other field is only ever replaced together with the
/// whole record. `status_orders` is the backend's status label and is kept as
/// free text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: Option<OrderId>,
    #[serde(default)]
    pub courier_id: Option<CourierId>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_phone: Option<Phone>,
    #[serde(default, alias = "eStatusOrders", alias = "estatusOrders")]
    pub status_orders: Option<String>,
    pub order_time: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub branch_address: Option<String>,
    #[serde(default)]
    pub flat: Option<i64>,
    #[serde(default)]
    pub front_door: Option<i64>,
    #[serde(default)]
    pub floor: Option<i64>,
    #[serde(default)]
    pub weight: Option<f64>,
    pub end_cooking_time: String,
    #[serde(default, deserialize_with = "serde_util::null_as_default::deserialize")]
    pub dishes_orders: Vec<DishOrder>,
}

impl Order {
    /// Whether a courier has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.courier_id.is_some()
    }

    /// `order_time` as a local date-time, if it parses.
    pub fn order_time_parsed(&self) -> Option<NaiveDateTime> {
        serde_util::parse_local_datetime(&self.order_time)
    }

    /// `end_cooking_time` as a local date-time, if it parses.
    pub fn end_cooking_time_parsed(&self) -> Option<NaiveDateTime> {
        serde_util::parse_local_datetime(&self.end_cooking_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend_order() -> serde_json::Value {
        json!({
            "id": 7,
            "courierId": null,
            "clientName": "Иван",
            "description": "Домофон не работает",
            "clientPhone": 79990001122_i64,
            "statusOrders": "AWAITING_DELIVERY",
            "orderTime": "2024-03-01T12:30:00",
            "address": "ул. Ленина, 1",
            "branchAddress": "пр. Мира, 10",
            "flat": 12,
            "frontDoor": 2,
            "floor": 5,
            "weight": 1.5,
            "endCookingTime": "2024-03-01T13:00:00",
            "dishesOrders": [
                { "orderId": 7, "dishId": 3, "dishName": "Борщ" },
                { "orderId": 7, "dishId": 1, "dishName": "Пельмени" }
            ]
        })
    }

    #[test]
    fn test_order_deserializes_backend_shape() {
        let order: Order = serde_json::from_value(backend_order()).unwrap();
        assert_eq!(order.id, Some(OrderId::new(7)));
        assert!(!order.is_assigned());
        assert_eq!(order.status_orders.as_deref(), Some("AWAITING_DELIVERY"));
        assert_eq!(order.front_door, Some(2));
        let dishes: Vec<_> = order.dishes_orders.iter().map(|d| d.dish_name.as_str()).collect();
        assert_eq!(dishes, ["Борщ", "Пельмени"]);
    }

    #[test]
    fn test_order_serializes_camel_case_with_nulls() {
        let order: Order = serde_json::from_value(backend_order()).unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value, backend_order());
    }

    #[test]
    fn test_order_accepts_legacy_status_field() {
        let mut raw = backend_order();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("statusOrders");
        obj.insert("estatusOrders".into(), json!("DELIVERED"));
        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.status_orders.as_deref(), Some("DELIVERED"));
    }

    #[test]
    fn test_order_accepts_text_phone() {
        let mut raw = backend_order();
        raw["clientPhone"] = json!("+7 999 000-11-22");
        let order: Order = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(order.client_phone, Some(Phone::Text("+7 999 000-11-22".into())));
        assert_eq!(order.client_phone.as_ref().unwrap().to_string(), "+7 999 000-11-22");
        assert_eq!(serde_json::to_value(&order).unwrap(), raw);
    }

    #[test]
    fn test_order_accepts_numeric_phone() {
        let order: Order = serde_json::from_value(backend_order()).unwrap();
        assert_eq!(order.client_phone, Some(Phone::Number(79990001122)));
        assert_eq!(order.client_phone.unwrap().to_string(), "79990001122");
    }

    #[test]
    fn test_order_optional_fields_may_be_missing() {
        let order: Order = serde_json::from_value(json!({
            "orderTime": "2024-03-01T12:30:00",
            "endCookingTime": "2024-03-01T13:00:00",
            "dishesOrders": null
        }))
        .unwrap();
        assert_eq!(order.id, None);
        assert_eq!(order.weight, None);
        assert!(order.dishes_orders.is_empty());
    }

    #[test]
    fn test_order_requires_timestamps() {
        let result = serde_json::from_value::<Order>(json!({ "id": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_helpers() {
        let order: Order = serde_json::from_value(backend_order()).unwrap();
        let start = order.order_time_parsed().unwrap();
        let end = order.end_cooking_time_parsed().unwrap();
        assert_eq!((end - start).num_minutes(), 30);
    }
}
