//! Local key-value persistence for the cart snapshot.
//!
//! The cart is persisted as a whole-value JSON snapshot under a fixed key
//! after every successful mutation, and read back once at store startup.
//!
//! `SnapshotStore` is the storage capability; `FileStore` keeps one JSON
//! file per key on disk, `MemoryStore` backs tests and embedders that do
//! not want filesystem persistence.

pub mod snapshot;

pub use snapshot::{FileStore, MemoryStore, SnapshotStore};
