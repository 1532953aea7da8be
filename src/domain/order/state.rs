//! Order store — the client-side view of "current order" and "all orders".
//!
//! The app owns a store (usually through `DeliveryClient`) and observes it via
//! [`OrderStore::subscribe`]. Every write replaces a whole field and emits exactly
//! one [`OrderStoreEvent`].

use super::Order;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Notification channel capacity. Slow observers get `RecvError::Lagged`.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Snapshot of the store's two fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStoreState {
    pub current_order: Option<Order>,
    /// Server response order; no dedup, no sort.
    pub all_orders: Vec<Order>,
}

/// Change notification, carrying the new value of the replaced field.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderStoreEvent {
    CurrentOrderReplaced(Option<Order>),
    AllOrdersReplaced(Vec<Order>),
}

/// Observable order store.
///
/// Cheap to clone; clones share state and observers. Independent stores are
/// created with [`OrderStore::new`].
#[derive(Clone)]
pub struct OrderStore {
    state: Arc<RwLock<OrderStoreState>>,
    event_tx: broadcast::Sender<OrderStoreEvent>,
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore")
            .field("state", &*self.state.read())
            .field("event_tx", &"<broadcast::Sender>")
            .finish()
    }
}

impl OrderStore {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(OrderStoreState::default())),
            event_tx,
        }
    }

    /// Register an observer. Only changes made after this call are delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<OrderStoreEvent> {
        self.event_tx.subscribe()
    }

    /// Replace the current order. `None` clears the selection.
    pub fn set_current_order(&self, order: Option<Order>) {
        let mut state = self.state.write();
        state.current_order = order.clone();
        self.emit(OrderStoreEvent::CurrentOrderReplaced(order));
    }

    /// Replace the order list wholesale.
    pub fn set_all_orders(&self, orders: Vec<Order>) {
        let mut state = self.state.write();
        state.all_orders = orders.clone();
        self.emit(OrderStoreEvent::AllOrdersReplaced(orders));
    }

    /// Reset both fields to their initial empty values.
    pub fn clear(&self) {
        self.set_current_order(None);
        self.set_all_orders(Vec::new());
    }

    pub fn current_order(&self) -> Option<Order> {
        self.state.read().current_order.clone()
    }

    pub fn all_orders(&self) -> Vec<Order> {
        self.state.read().all_orders.clone()
    }

    pub fn snapshot(&self) -> OrderStoreState {
        self.state.read().clone()
    }

    /// Called with the write guard held, so observers see events in the same
    /// order the writes landed.
    fn emit(&self, event: OrderStoreEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::trace!("Order store changed with no active observers");
        }
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
