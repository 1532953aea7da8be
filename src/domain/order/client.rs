//! Orders sub-client — fetch, update and assign orders, mirroring results into
//! the client's [`OrderStore`](super::OrderStore).
//!
//! Every method makes one request (under the default retry policy). On success
//! it replaces exactly one store field and returns the decoded value; on failure
//! it logs the operation's diagnostic once and returns the error untouched,
//! leaving the store as it was.

use crate::client::DeliveryClient;
use crate::domain::order::{CourierAssignment, Order};
use crate::error::{HttpError, SdkError};
use crate::http::ApiRequest;
use crate::shared::{CourierId, OrderId};

use serde::de::DeserializeOwned;
use serde::Serialize;

const ORDERS_PATH: &str = "/orders";

const UPDATE_FAILED: &str = "Ошибка при обновлении заказа";
const ASSIGN_FAILED: &str = "Ошибка при присвоении заказа курьеру";
const AWAITING_FAILED: &str = "Ошибка при получении ожидающих заказов";
const BY_ID_FAILED: &str = "Ошибка при получении заказа по Id";
const FOR_COURIER_FAILED: &str = "Ошибка при получении заказов для курьера";

pub struct Orders<'a> {
    pub(crate) client: &'a DeliveryClient,
}

impl<'a> Orders<'a> {
    /// `PUT /orders` with the full record; the response becomes the current order.
    pub async fn update_order(&self, order: &Order) -> Result<Order, SdkError> {
        let request = put_json(ORDERS_PATH.to_string(), order);
        let updated: Order = self.send(request, UPDATE_FAILED).await?;
        self.client.store.set_current_order(Some(updated.clone()));
        Ok(updated)
    }

    /// `PUT /orders/courier`; the response becomes the current order.
    pub async fn assign_order_to_courier(
        &self,
        assignment: CourierAssignment,
    ) -> Result<Order, SdkError> {
        let request = put_json(format!("{}/courier", ORDERS_PATH), &assignment);
        let assigned: Order = self.send(request, ASSIGN_FAILED).await?;
        self.client.store.set_current_order(Some(assigned.clone()));
        Ok(assigned)
    }

    /// `GET /orders/awaiting-delivery`; the response replaces the order list.
    pub async fn get_awaiting_delivery_orders(&self) -> Result<Vec<Order>, SdkError> {
        let request = ApiRequest::get(format!("{}/awaiting-delivery", ORDERS_PATH));
        let orders: Vec<Order> = self.send(Ok(request), AWAITING_FAILED).await?;
        tracing::debug!(count = orders.len(), "Received orders awaiting delivery");
        self.client.store.set_all_orders(orders.clone());
        Ok(orders)
    }

    /// `GET /orders/{id}`; the response becomes the current order.
    pub async fn get_order_by_id(&self, order_id: OrderId) -> Result<Order, SdkError> {
        let request = ApiRequest::get(format!("{}/{}", ORDERS_PATH, order_id));
        let order: Order = self.send(Ok(request), BY_ID_FAILED).await?;
        self.client.store.set_current_order(Some(order.clone()));
        Ok(order)
    }

    /// `GET /orders/courier/{id}`; the response replaces the order list.
    pub async fn get_orders_for_courier(
        &self,
        courier_id: CourierId,
    ) -> Result<Vec<Order>, SdkError> {
        let request = ApiRequest::get(format!("{}/courier/{}", ORDERS_PATH, courier_id));
        let orders: Vec<Order> = self.send(Ok(request), FOR_COURIER_FAILED).await?;
        self.client.store.set_all_orders(orders.clone());
        Ok(orders)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn send<T: DeserializeOwned>(
        &self,
        request: Result<ApiRequest, SdkError>,
        failure: &'static str,
    ) -> Result<T, SdkError> {
        let result = self.try_send(request).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "{}", failure);
        }
        result
    }

    async fn try_send<T: DeserializeOwned>(
        &self,
        request: Result<ApiRequest, SdkError>,
    ) -> Result<T, SdkError> {
        let request = request?.with_headers(self.client.auth.headers());
        let value = self.client.transport.send(request).await?;
        serde_json::from_value(value).map_err(|e| SdkError::Http(HttpError::Decode(e)))
    }
}

fn put_json(path: String, body: &impl Serialize) -> Result<ApiRequest, SdkError> {
    Ok(ApiRequest::put(path, serde_json::to_value(body)?))
}
