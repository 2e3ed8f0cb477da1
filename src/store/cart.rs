//! Cart state management.
//!
//! `CartStore` owns the ordered sequence of cart lines, applies the three
//! mutation operations against live stock data, and persists the whole
//! sequence to its snapshot slot after every successful change.
//!
//! Failures never propagate to the caller: each operation resolves
//! normally and reports problems through the injected `Notifier` (with
//! the underlying error in the log). Mutations are serialized through a
//! single operation lock, so concurrent calls for the same product cannot
//! lose updates to a read-modify-write race.

use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::sync::Mutex as OpMutex;
use tracing::{debug, warn};

use crate::api::{ApiError, ProductSource};
use crate::cache::SnapshotStore;
use crate::models::CartItem;
use crate::notify::Notifier;

// ============================================================================
// Constants
// ============================================================================

/// Storage key for the persisted cart snapshot
pub const CART_SNAPSHOT_KEY: &str = "cart";

/// Message shown when the requested quantity exceeds available stock
const OUT_OF_STOCK_MSG: &str = "Requested quantity is out of stock";

/// Generic per-operation failure messages
const ADD_FAILED_MSG: &str = "Could not add the product to the cart";
const REMOVE_FAILED_MSG: &str = "Could not remove the product from the cart";
const UPDATE_FAILED_MSG: &str = "Could not update the product quantity";

// ============================================================================
// Errors
// ============================================================================

/// Internal error taxonomy for cart operations.
///
/// Never returned to callers; the public operations translate these into
/// notifier messages.
#[derive(Error, Debug)]
pub enum CartError {
    #[error("requested quantity exceeds available stock")]
    OutOfStock,

    #[error("product {0} is not in the cart")]
    NotInCart(u32),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to encode cart snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to persist cart snapshot: {0}")]
    Storage(#[from] anyhow::Error),
}

// ============================================================================
// Store
// ============================================================================

/// Owner of the in-memory cart sequence and sole writer of its snapshot.
///
/// Constructed once by the application entry point with its collaborators
/// injected; UI consumers share it by reference or `Arc`.
pub struct CartStore {
    items: StdMutex<Vec<CartItem>>,
    /// Serializes whole mutations, including their stock fetches.
    ops: OpMutex<()>,
    products: Arc<dyn ProductSource>,
    snapshots: Arc<dyn SnapshotStore>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Open the store, loading the initial cart from the snapshot slot.
    ///
    /// An absent snapshot means a fresh cart; an unreadable or corrupt one
    /// is logged and also falls back to an empty cart rather than failing
    /// startup.
    pub fn open(
        products: Arc<dyn ProductSource>,
        snapshots: Arc<dyn SnapshotStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let items = match snapshots.get(CART_SNAPSHOT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => {
                    debug!(lines = items.len(), "loaded cart snapshot");
                    items
                }
                Err(err) => {
                    warn!(%err, "stored cart snapshot is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("no stored cart snapshot, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(%err, "failed to read cart snapshot, starting empty");
                Vec::new()
            }
        };

        Self {
            items: StdMutex::new(items),
            ops: OpMutex::new(()),
            products,
            snapshots,
            notifier,
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Current cart contents, in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.lock_items().clone()
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lock_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_items().is_empty()
    }

    /// Cart total: sum of line subtotals.
    pub fn total(&self) -> f64 {
        self.lock_items().iter().map(CartItem::subtotal).sum()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add one unit of a product to the cart.
    ///
    /// A product already in the cart has its quantity incremented, capped
    /// at the live stock level; a new product is fetched from the catalog
    /// and appended with quantity 1.
    pub async fn add_product(&self, product_id: u32) {
        let _op = self.ops.lock().await;
        if let Err(err) = self.try_add(product_id).await {
            self.report(product_id, &err, ADD_FAILED_MSG);
        }
    }

    /// Remove a product line from the cart entirely.
    pub async fn remove_product(&self, product_id: u32) {
        let _op = self.ops.lock().await;
        if let Err(err) = self.try_remove(product_id) {
            self.report(product_id, &err, REMOVE_FAILED_MSG);
        }
    }

    /// Set the quantity of a product line to an explicit value.
    ///
    /// Quantities of 1 or less are ignored as degenerate requests; a
    /// product not in the cart is a silent no-op.
    pub async fn update_amount(&self, product_id: u32, amount: u32) {
        let _op = self.ops.lock().await;
        if let Err(err) = self.try_update(product_id, amount).await {
            self.report(product_id, &err, UPDATE_FAILED_MSG);
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    async fn try_add(&self, product_id: u32) -> Result<(), CartError> {
        let mut items = self.items();

        if let Some(item) = items.iter_mut().find(|item| item.id == product_id) {
            let stock = self.products.fetch_stock(product_id).await?;
            // >= also refuses when stock dropped below what the cart holds
            if item.amount >= stock.amount {
                return Err(CartError::OutOfStock);
            }
            item.amount += 1;
        } else {
            let product = self.products.fetch_product(product_id).await?;
            items.push(CartItem::from(product));
        }

        self.commit(items)
    }

    fn try_remove(&self, product_id: u32) -> Result<(), CartError> {
        let mut items = self.items();
        let before = items.len();
        items.retain(|item| item.id != product_id);

        if items.len() == before {
            return Err(CartError::NotInCart(product_id));
        }

        self.commit(items)
    }

    async fn try_update(&self, product_id: u32, amount: u32) -> Result<(), CartError> {
        // Stock is consulted before looking at the cart, matching the
        // operation's contract of always validating against live data.
        let stock = self.products.fetch_stock(product_id).await?;

        let mut items = self.items();
        let Some(item) = items.iter_mut().find(|item| item.id == product_id) else {
            debug!(product_id, "update for product not in cart, ignoring");
            return Ok(());
        };

        if amount > stock.amount {
            return Err(CartError::OutOfStock);
        }
        if amount <= 1 {
            debug!(product_id, amount, "ignoring degenerate quantity request");
            return Ok(());
        }

        item.amount = amount;
        self.commit(items)
    }

    /// Persist the new sequence, then swap it into memory.
    ///
    /// Persist-first: a storage failure leaves the in-memory cart exactly
    /// as it was, so callers never observe a half-applied mutation.
    fn commit(&self, items: Vec<CartItem>) -> Result<(), CartError> {
        let encoded = serde_json::to_string(&items)?;
        self.snapshots.set(CART_SNAPSHOT_KEY, &encoded)?;
        *self.lock_items() = items;
        Ok(())
    }

    fn report(&self, product_id: u32, err: &CartError, fallback: &'static str) {
        warn!(product_id, %err, "cart operation failed");
        let message = match err {
            CartError::OutOfStock => OUT_OF_STOCK_MSG,
            _ => fallback,
        };
        self.notifier.report_error(message);
    }

    fn lock_items(&self) -> MutexGuard<'_, Vec<CartItem>> {
        // Lock holders never panic mid-update; recover the data on poison
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
