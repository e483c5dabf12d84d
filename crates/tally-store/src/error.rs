//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in tally-api) ← logged, returned as a generic 500           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing receipt is not an error here: `get` returns `Ok(None)` and the
//! caller decides what "not found" means.

use thiserror::Error;
use uuid::Uuid;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this id already exists.
    ///
    /// ## When This Occurs
    /// - The id generator produced an id that is already stored
    /// - A caller tried to overwrite a record (records are immutable)
    #[error("Receipt {0} already exists")]
    Duplicate(Uuid),

    /// A writer panicked while holding the lock.
    #[error("Receipt store lock poisoned")]
    LockPoisoned,
}

/// Convenience type alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
