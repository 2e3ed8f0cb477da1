//! Stock level snapshot for a single product.

use serde::{Deserialize, Serialize};

/// Available stock for a product, as reported by the stock endpoint.
///
/// This is a point-in-time remote snapshot: it is fetched fresh for every
/// operation that needs it and never persisted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub id: u32,
    pub amount: u32,
}
