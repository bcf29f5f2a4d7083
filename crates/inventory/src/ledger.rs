use std::sync::Arc;

use tracing::{info, warn};

use wms_core::{Clock, DomainError, DomainResult, ProductCode, RepositoryError};

use crate::request::{InboundRequest, OutboundRequest};
use crate::stock::{DEFAULT_LOCATION, StockRecord};

/// Storage capability for stock records, keyed by product code.
///
/// Implementations live outside the domain layer so the in-memory store can
/// be swapped for a persistent backend without touching business logic.
pub trait StockRepository {
    fn get(&self, product: &ProductCode) -> Result<Option<StockRecord>, RepositoryError>;
    fn put(&self, record: StockRecord) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<StockRecord>, RepositoryError>;
}

/// Owns all stock records and applies inbound/outbound mutations to them.
///
/// The ledger is the only writer of stock state. It never deletes a record;
/// a product that was ever received keeps its record at quantity zero.
pub struct InventoryLedger<R: StockRepository> {
    repo: R,
    clock: Arc<dyn Clock>,
}

impl<R: StockRepository> InventoryLedger<R> {
    pub fn new(repo: R, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Apply an inbound receipt.
    ///
    /// Unknown products get a fresh record at the default location; known
    /// products get their quantity incremented. Returns the request marked
    /// Processed. Fails only on an unexpected fault, leaving state unchanged.
    pub fn process_inbound(&self, request: InboundRequest) -> DomainResult<InboundRequest> {
        match self.apply_inbound(&request) {
            Ok(level) => {
                info!(
                    inbound = %request.request_id(),
                    product = %request.product(),
                    quantity = request.quantity(),
                    level,
                    "inbound processed"
                );
                Ok(request.processed())
            }
            Err(err) => {
                warn!(inbound = %request.request_id(), error = %err, "inbound processing failed");
                Err(err)
            }
        }
    }

    fn apply_inbound(&self, request: &InboundRequest) -> DomainResult<u32> {
        let now = self.clock.now();
        let next = match self.repo.get(request.product())? {
            Some(stock) => stock.received(request.quantity(), now)?,
            None => StockRecord::new(
                request.product().clone(),
                request.product_name(),
                request.quantity(),
                DEFAULT_LOCATION,
                now,
            ),
        };
        let level = next.quantity();
        self.repo.put(next)?;
        Ok(level)
    }

    /// Apply an outbound draw.
    ///
    /// Fails with `InsufficientStock` when the product is unknown or on-hand
    /// quantity is below the requested amount; state is unchanged on failure.
    /// Returns the request marked Shipped on success.
    pub fn process_outbound(&self, request: OutboundRequest) -> DomainResult<OutboundRequest> {
        match self.apply_outbound(&request) {
            Ok(level) => {
                info!(
                    outbound = %request.request_id(),
                    product = %request.product(),
                    quantity = request.quantity(),
                    level,
                    "outbound processed"
                );
                Ok(request.shipped())
            }
            Err(err) => {
                warn!(outbound = %request.request_id(), error = %err, "outbound processing failed");
                Err(err)
            }
        }
    }

    fn apply_outbound(&self, request: &OutboundRequest) -> DomainResult<u32> {
        let now = self.clock.now();
        let stock = self
            .repo
            .get(request.product())?
            .ok_or_else(|| DomainError::insufficient_stock(request.quantity(), 0))?;
        let next = stock.released(request.quantity(), now)?;
        let level = next.quantity();
        self.repo.put(next)?;
        Ok(level)
    }

    /// Current on-hand quantity. An unknown product is zero stock, not an error.
    pub fn inventory_level(&self, product: &ProductCode) -> DomainResult<u32> {
        Ok(self
            .repo
            .get(product)?
            .map(|stock| stock.quantity())
            .unwrap_or(0))
    }

    /// Full record query; `None` when the product was never received.
    pub fn stock(&self, product: &ProductCode) -> DomainResult<Option<StockRecord>> {
        Ok(self.repo.get(product)?)
    }

    pub fn list_stock(&self) -> DomainResult<Vec<StockRecord>> {
        Ok(self.repo.list()?)
    }
}
