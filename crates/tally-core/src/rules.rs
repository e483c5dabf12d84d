//! # Points Rules
//!
//! Computes the loyalty-points score of a validated [`Receipt`].
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule              Contribution                                         │
//! │  ────────────────  ──────────────────────────────────────────────────   │
//! │  retailer          +1 per ASCII letter or digit in the retailer name    │
//! │  round dollar      +50 if the total has no cents                        │
//! │  quarter           +25 if the total is a multiple of $0.25              │
//! │  item pairs        +5 per two items                                     │
//! │  descriptions      ceil(price × 0.2) per item whose trimmed             │
//! │                    description length is a multiple of 3                │
//! │  odd day           +6 if the purchase day is odd                        │
//! │  afternoon         +10 if purchased after 14:00 and before 16:00        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is a pure function of the receipt. Money comparisons use
//! integer cents.
//!
//! ## Example
//! ```rust
//! use serde_json::json;
//! use tally_core::{rules::calculate_points, validation::validate_receipt};
//!
//! let receipt = validate_receipt(&json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "13:13",
//!     "total": "1.25",
//!     "items": [{"shortDescription": "Pepsi - 12-oz", "price": "1.25"}]
//! }))
//! .unwrap();
//!
//! assert_eq!(calculate_points(&receipt), 31);
//! ```

use chrono::{Datelike, NaiveTime};
use serde::Serialize;

use crate::types::{Item, Receipt};

/// Points for a total with no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Points for a total that is a multiple of [`QUARTER_CENTS`].
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Step, in cents, for the quarter-multiple rule.
pub const QUARTER_CENTS: i64 = 25;

/// Points per two items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Description bonus is `price × NUMERATOR / DENOMINATOR`, rounded up.
pub const DESCRIPTION_BONUS_NUMERATOR: u32 = 1;
pub const DESCRIPTION_BONUS_DENOMINATOR: u32 = 5;

/// Points for an odd day of the month.
pub const ODD_DAY_POINTS: u64 = 6;

/// Points for a purchase strictly inside the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// Exclusive bounds of the afternoon window.
const AFTERNOON_START: (u32, u32) = (14, 0);
const AFTERNOON_END: (u32, u32) = (16, 0);

// =============================================================================
// Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Evaluates every rule against `receipt`.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        PointsBreakdown {
            retailer: retailer_points(receipt.retailer()),
            round_dollar: if receipt.total().is_whole_dollars() {
                ROUND_DOLLAR_POINTS
            } else {
                0
            },
            quarter_multiple: if receipt.total().is_multiple_of(QUARTER_CENTS) {
                QUARTER_MULTIPLE_POINTS
            } else {
                0
            },
            item_pairs: item_pair_points(receipt.items().len()),
            descriptions: receipt
                .items()
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
            odd_day: if receipt.purchase_date().day() % 2 == 1 {
                ODD_DAY_POINTS
            } else {
                0
            },
            afternoon: if is_afternoon(receipt.purchase_time()) {
                AFTERNOON_POINTS
            } else {
                0
            },
        }
    }

    /// Sum of all contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the points total of `receipt`.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per ASCII alphanumeric character. Spaces, punctuation and
/// non-ASCII letters score nothing.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// `5 × floor(count / 2)`.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Bonus for an item whose trimmed description length is a positive multiple
/// of three. Length counts characters, not bytes.
pub fn description_points(item: &Item) -> u64 {
    let len = item.trimmed_description().chars().count();
    if len == 0 || len % 3 != 0 {
        return 0;
    }
    // Validated prices are never negative.
    item.price()
        .scaled_dollars_ceil(DESCRIPTION_BONUS_NUMERATOR, DESCRIPTION_BONUS_DENOMINATOR)
        .max(0) as u64
}

/// True for 14:01 through 15:59.
pub fn is_afternoon(time: NaiveTime) -> bool {
    let start = NaiveTime::from_hms_opt(AFTERNOON_START.0, AFTERNOON_START.1, 0);
    let end = NaiveTime::from_hms_opt(AFTERNOON_END.0, AFTERNOON_END.1, 0);
    match (start, end) {
        (Some(start), Some(end)) => time > start && time < end,
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
