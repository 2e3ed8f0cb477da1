//! cartcache - client-side shopping cart state for a storefront.
//!
//! The crate centers on [`CartStore`]: it owns the ordered list of cart
//! lines, validates additions and quantity changes against live stock
//! from the catalog API, and persists the whole cart to a local snapshot
//! slot after every successful mutation so the cart survives restarts.
//!
//! Collaborators are injected, not global:
//!
//! - [`api::ProductSource`] - product/stock lookups ([`api::ApiClient`]
//!   over HTTP in production)
//! - [`cache::SnapshotStore`] - the snapshot slot ([`cache::FileStore`]
//!   on disk, [`cache::MemoryStore`] for tests)
//! - [`notify::Notifier`] - user-facing error messages
//!
//! Cart operations never fail from the caller's point of view; problems
//! surface as notifier messages and log entries.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cartcache::{ApiClient, CartStore, Config, FileStore, LogNotifier};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let store = CartStore::open(
//!     Arc::new(ApiClient::new(&config.api_base_url)?),
//!     Arc::new(FileStore::new(config.snapshot_dir()?)?),
//!     Arc::new(LogNotifier),
//! );
//!
//! store.add_product(1).await;
//! println!("{} lines, total {:.2}", store.len(), store.total());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod notify;
pub mod store;

pub use api::{ApiClient, ApiError, ProductSource};
pub use cache::{FileStore, MemoryStore, SnapshotStore};
pub use config::Config;
pub use models::{CartItem, Product, StockInfo};
pub use notify::{LogNotifier, Notifier};
pub use store::{CartError, CartStore, CART_SNAPSHOT_KEY};
