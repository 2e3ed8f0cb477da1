use async_trait::async_trait;

use crate::models::{Product, StockInfo};

use super::ApiError;

/// Read-only product/stock lookups the cart store depends on.
///
/// Implemented by `ApiClient` for the real catalog service; tests inject
/// in-memory stubs.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch product details by id. Fails on not-found or network error.
    async fn fetch_product(&self, id: u32) -> Result<Product, ApiError>;

    /// Fetch the current stock level by id. Fails on not-found or network error.
    async fn fetch_stock(&self, id: u32) -> Result<StockInfo, ApiError>;
}
