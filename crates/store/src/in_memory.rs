use std::collections::HashMap;
use std::sync::RwLock;

use wms_core::{OrderId, ProductCode, RepositoryError};
use wms_inventory::{StockRecord, StockRepository};
use wms_orders::{Order, OrderRepository};

/// In-memory stock store, keyed by product code.
///
/// `put` overwrites the record for its key; nothing is ever removed.
/// Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    records: RwLock<HashMap<ProductCode, StockRecord>>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StockRepository for InMemoryStockStore {
    fn get(&self, product: &ProductCode) -> Result<Option<StockRecord>, RepositoryError> {
        let records = self.records.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(records.get(product).cloned())
    }

    fn put(&self, record: StockRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write().map_err(|_| RepositoryError::Poisoned)?;
        records.insert(record.product().clone(), record);
        Ok(())
    }

    fn list(&self) -> Result<Vec<StockRecord>, RepositoryError> {
        let records = self.records.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }
}

/// In-memory order store, keyed by order id.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderStore {
    fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(orders.get(&id).cloned())
    }

    fn put(&self, order: Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().map_err(|_| RepositoryError::Poisoned)?;
        orders.insert(order.order_id(), order);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(orders.values().cloned().collect())
    }
}
