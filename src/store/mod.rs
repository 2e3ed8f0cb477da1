//! The cart store: in-memory cart state, the three mutation operations,
//! and snapshot persistence after every successful mutation.

pub mod cart;

pub use cart::{CartError, CartStore, CART_SNAPSHOT_KEY};
