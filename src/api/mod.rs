//! REST client module for the product catalog service.
//!
//! The `ProductSource` trait is the capability the cart store consumes:
//! fetch a product's details or its current stock level by id. `ApiClient`
//! is the production implementation, speaking JSON over HTTP to the
//! catalog API (`/products/{id}` and `/stock/{id}`).

pub mod client;
pub mod error;
pub mod source;

pub use client::ApiClient;
pub use error::ApiError;
pub use source::ProductSource;
