//! In-memory receipt store.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MemoryStore                                                            │
//! │                                                                         │
//! │   RwLock<HashMap<Uuid, Receipt>>                                       │
//! │     • get  → shared read lock, clones the receipt out                  │
//! │     • put  → exclusive write lock, refuses to overwrite               │
//! │                                                                         │
//! │  A put that returned Ok is visible to every get that starts after it. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use tally_core::Receipt;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::ReceiptStore;

/// Receipt store backed by a lock-guarded `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    receipts: RwLock<HashMap<Uuid, Receipt>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn put(&self, id: Uuid, receipt: Receipt) -> StoreResult<()> {
        let mut receipts = self.receipts.write().map_err(|_| StoreError::LockPoisoned)?;
        match receipts.entry(id) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(id)),
            Entry::Vacant(slot) => {
                slot.insert(receipt);
                debug!(%id, stored = receipts.len(), "Receipt stored");
                Ok(())
            }
        }
    }

    fn get(&self, id: &Uuid) -> StoreResult<Option<Receipt>> {
        let receipts = self.receipts.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(receipts.get(id).cloned())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
