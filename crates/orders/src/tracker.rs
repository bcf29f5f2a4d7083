use std::sync::Arc;

use tracing::{debug, info, warn};

use wms_core::{Clock, CustomerId, DomainError, DomainResult, IdSource, OrderId, RepositoryError};

use crate::order::{Order, OrderItem, OrderStatus};

/// Storage capability for orders, keyed by order id.
pub trait OrderRepository {
    fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;
    fn put(&self, order: Order) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<Order>, RepositoryError>;
}

/// Owns order records and drives them through the status machine.
///
/// Identifier generation and timestamps come from injected capabilities so
/// the tracker stays deterministic under test.
pub struct OrderLifecycleTracker<R: OrderRepository> {
    repo: R,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl<R: OrderRepository> OrderLifecycleTracker<R> {
    pub fn new(repo: R, ids: Arc<dyn IdSource>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, ids, clock }
    }

    /// Build a new order in Created state, appending each item in turn (the
    /// total is recomputed after every append) and persist it.
    pub fn create_order(&self, customer: CustomerId, items: Vec<OrderItem>) -> DomainResult<Order> {
        let now = self.clock.now();
        let mut order = Order::new(OrderId::new(self.ids.next()), customer, now);
        for item in items {
            order = order.with_item(item, now);
        }
        self.repo.put(order.clone())?;
        info!(
            order = %order.order_id(),
            customer = %order.customer(),
            total = order.total_amount(),
            "order created"
        );
        Ok(order)
    }

    /// Created → Confirmed. Any other current status leaves the stored order
    /// untouched and returns it as-is.
    pub fn confirm_order(&self, id: OrderId) -> DomainResult<Order> {
        self.transition(id, "order confirmed", |order, at| {
            if order.status() == OrderStatus::Created {
                Some(order.confirmed(at))
            } else {
                None
            }
        })
    }

    /// Any status except Shipped or Delivered → Cancelled; no-op otherwise.
    pub fn cancel_order(&self, id: OrderId) -> DomainResult<Order> {
        self.transition(id, "order cancelled", |order, at| {
            if order.is_cancellable() {
                Some(order.cancelled(at))
            } else {
                None
            }
        })
    }

    pub fn order(&self, id: OrderId) -> DomainResult<Option<Order>> {
        Ok(self.repo.get(id)?)
    }

    pub fn list_orders(&self) -> DomainResult<Vec<Order>> {
        Ok(self.repo.list()?)
    }

    fn transition(
        &self,
        id: OrderId,
        applied_msg: &'static str,
        step: impl FnOnce(Order, chrono::DateTime<chrono::Utc>) -> Option<Order>,
    ) -> DomainResult<Order> {
        let Some(current) = self.repo.get(id)? else {
            warn!(order = %id, "transition requested for unknown order");
            return Err(DomainError::not_found());
        };
        let status_before = current.status();

        match step(current.clone(), self.clock.now()) {
            Some(next) => {
                self.repo.put(next.clone())?;
                info!(order = %id, from = ?status_before, to = ?next.status(), "{applied_msg}");
                Ok(next)
            }
            None => {
                debug!(order = %id, status = ?status_before, "transition skipped, status unchanged");
                Ok(current)
            }
        }
    }
}
