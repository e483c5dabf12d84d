//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It validates submitted receipts and
//! scores them, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-api (axum)                             │   │
//! │  │   POST /receipts/process        GET /receipts/{id}/points       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │   rules   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  receipt  │  │  points   │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  uuid v4  │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tally-store (Receipt Store)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt and Item
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Receipt and identifier validation
//! - [`rules`] - Points rule engine
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output
//! 2. **No I/O**: storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Validated Types**: a `Receipt` only exists if it passed validation
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use tally_core::{calculate_points, validate_receipt};
//!
//! let receipt = validate_receipt(&json!({
//!     "retailer": "Walgreens",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "08:13",
//!     "total": "2.65",
//!     "items": [
//!         {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
//!         {"shortDescription": "Dasani", "price": "1.40"}
//!     ]
//! }))
//! .unwrap();
//!
//! assert_eq!(calculate_points(&receipt), 15);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rules::{calculate_points, PointsBreakdown};
pub use types::{Item, Receipt};
pub use validation::{
    is_uuid_v4, parse_receipt, validate_receipt, validate_receipt_id, MAX_AMOUNT_CENTS,
};
