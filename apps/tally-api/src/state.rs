//! Shared application state.

use std::sync::Arc;

use tally_store::{MemoryStore, ReceiptStore};

use crate::ids::{IdGenerator, RandomIds};

/// State handed to every handler.
///
/// Both collaborators are trait objects so tests can inject a
/// deterministic id source or a failing store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>, ids: Arc<dyn IdGenerator>) -> Self {
        AppState { store, ids }
    }

    /// Empty in-memory store with random v4 ids.
    pub fn in_memory() -> Self {
        AppState::new(Arc::new(MemoryStore::new()), Arc::new(RandomIds))
    }
}
