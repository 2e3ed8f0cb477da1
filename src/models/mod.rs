//! Data models for the cart domain.
//!
//! - `Product`: a catalog entry fetched from the remote API
//! - `CartItem`: a product line in the cart with its quantity
//! - `StockInfo`: remote snapshot of available stock for a product

pub mod product;
pub mod stock;

pub use product::{CartItem, Product};
pub use stock::StockInfo;
