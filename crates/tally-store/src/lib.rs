//! # tally-store: Receipt Store for Tally
//!
//! Keeps accepted receipts keyed by their generated id.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.store.put(id, receipt)                                  │
//! │       │  state.store.get(&id)                                          │
//! │       ▼                                                                 │
//! │  dyn ReceiptStore  ◄── injected, so tests and future backends can      │
//! │       │                swap the implementation                         │
//! │       ▼                                                                 │
//! │  MemoryStore (RwLock<HashMap<Uuid, Receipt>>)                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use serde_json::json;
//! use tally_core::validate_receipt;
//! use tally_store::{MemoryStore, ReceiptStore};
//! use uuid::Uuid;
//!
//! let store = MemoryStore::new();
//! let receipt = validate_receipt(&json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "13:13",
//!     "total": "1.25",
//!     "items": [{"shortDescription": "Pepsi - 12-oz", "price": "1.25"}]
//! }))
//! .unwrap();
//!
//! let id = Uuid::new_v4();
//! store.put(id, receipt.clone()).unwrap();
//! assert_eq!(store.get(&id).unwrap(), Some(receipt));
//! ```

pub mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use tally_core::Receipt;
use uuid::Uuid;

/// Id → receipt mapping shared by all request handlers.
///
/// Implementations must be safe for concurrent `put`/`get`, and a `put`
/// that returned `Ok` must be visible to every later `get`. Records are
/// never replaced or removed.
pub trait ReceiptStore: Send + Sync {
    /// Stores `receipt` under `id`. Fails with [`StoreError::Duplicate`] if
    /// the id is taken.
    fn put(&self, id: Uuid, receipt: Receipt) -> StoreResult<()>;

    /// Looks up the receipt stored under `id`.
    fn get(&self, id: &Uuid) -> StoreResult<Option<Receipt>>;
}
