//! # Domain Types
//!
//! The validated receipt model.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐         ┌─────────────────────┐               │
//! │  │      Receipt        │  1..n   │        Item         │               │
//! │  │  ─────────────────  │────────►│  ─────────────────  │               │
//! │  │  retailer           │         │  short_description  │               │
//! │  │  purchase_date      │         │  price (Money)      │               │
//! │  │  purchase_time      │         └─────────────────────┘               │
//! │  │  items              │                                                │
//! │  │  total (Money)      │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Construction
//! Fields are private. A `Receipt` can only be obtained from
//! [`crate::validation::validate_receipt`], so every value of this type has
//! passed validation and the rules engine never re-checks its input.

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};
use ts_rs::TS;

use crate::money::Money;

/// Wire format of `purchaseTime`.
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Wire format of `purchaseDate`.
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Item
// =============================================================================

/// One line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Description exactly as submitted (untrimmed).
    short_description: String,

    #[ts(type = "string")]
    price: Money,
}

impl Item {
    pub(crate) fn new(short_description: String, price: Money) -> Self {
        Item {
            short_description,
            price,
        }
    }

    /// Description as submitted, surrounding whitespace included.
    #[inline]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Description with leading/trailing whitespace removed.
    #[inline]
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt that passed validation.
///
/// Immutable once built. Serializes back to the camelCase JSON shape it was
/// submitted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    retailer: String,

    #[serde(serialize_with = "serialize_date")]
    #[ts(as = "String")]
    purchase_date: NaiveDate,

    #[serde(serialize_with = "serialize_time")]
    #[ts(as = "String")]
    purchase_time: NaiveTime,

    items: Vec<Item>,

    #[ts(type = "string")]
    total: Money,
}

impl Receipt {
    pub(crate) fn new(
        retailer: String,
        purchase_date: NaiveDate,
        purchase_time: NaiveTime,
        items: Vec<Item>,
        total: Money,
    ) -> Self {
        Receipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        }
    }

    #[inline]
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    #[inline]
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    #[inline]
    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    /// Items in submission order. Never empty.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(PURCHASE_DATE_FORMAT))
}

fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(PURCHASE_TIME_FORMAT))
}

// =============================================================================
// Unit Tests
// =============================================================================
