//! Domain models for catalog products and cart lines.
//!
//! `Product` mirrors the catalog API response; `CartItem` is the same
//! product carried in the cart together with the chosen quantity.

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the product endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// One product line in the cart.
///
/// The cart holds at most one `CartItem` per product id; quantity changes
/// adjust `amount` rather than adding duplicate lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartItem {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

impl From<Product> for CartItem {
    /// A freshly added product enters the cart with quantity 1.
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }
}
