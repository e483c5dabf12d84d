//! Receipt id generation.

use uuid::Uuid;

/// Source of new receipt ids.
///
/// Every id produced must be a canonical UUID v4 so it passes
/// [`tally_core::validate_receipt_id`] when the client queries it back.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
