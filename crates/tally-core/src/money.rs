//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    35.35 % 0.25 = 0.09999999999999787  ❌ WRONG!                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3535 % 25 = 10                        ✅ exact                       │
//! │                                                                         │
//! │  Amounts arrive as "35.35" strings and are parsed straight into cents. │
//! │  No float is ever involved, not even transiently.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert_eq!(total.to_string(), "35.35");
//!
//! // Malformed amounts never parse
//! assert!("35.5".parse::<Money>().is_err());
//! assert!("35".parse::<Money>().is_err());
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64**: same width the rest of the workspace uses for cents
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Wire form**: serializes as `"<dollars>.<cc>"`, the form it was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(900).cents_part(), 0);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount is a whole number of dollars.
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount in cents is an exact multiple of `step_cents`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert!(Money::from_cents(125).is_multiple_of(25));
    /// assert!(!Money::from_cents(3535).is_multiple_of(25));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step_cents: i64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }

    /// Scales the amount by `numerator / denominator` and rounds the result UP
    /// to whole dollars.
    ///
    /// ## Implementation
    /// Works on cents with i128 intermediates:
    /// `ceil(cents * numerator / (denominator * 100))`. For non-negative
    /// amounts this is `(x + d - 1) / d`; negative amounts round toward
    /// positive infinity as well.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// // $1.01 × 0.2 = 0.202 → 1
    /// assert_eq!(Money::from_cents(101).scaled_dollars_ceil(1, 5), 1);
    /// // $12.00 × 0.2 = 2.4 → 3
    /// assert_eq!(Money::from_cents(1200).scaled_dollars_ceil(1, 5), 3);
    /// // $5.00 × 0.2 = 1.0 → 1 (exact, no bump)
    /// assert_eq!(Money::from_cents(500).scaled_dollars_ceil(1, 5), 1);
    /// ```
    pub fn scaled_dollars_ceil(&self, numerator: u32, denominator: u32) -> i64 {
        let num = self.0 as i128 * numerator as i128;
        let den = denominator as i128 * 100;
        let quotient = num / den;
        let ceil = if num % den > 0 { quotient + 1 } else { quotient };
        ceil as i64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Reasons a money string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// No `.` separating dollars and cents.
    #[error("missing decimal point")]
    MissingDecimalPoint,

    /// Nothing before the decimal point.
    #[error("missing whole-dollar digits")]
    MissingDollars,

    /// Fractional part is not exactly two digits.
    #[error("expected exactly two digits after the decimal point, found {0}")]
    FractionDigits(usize),

    /// A character other than an ASCII digit.
    #[error("non-numeric character")]
    NonNumeric,

    /// Amount does not fit in i64 cents.
    #[error("amount out of range")]
    Overflow,
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parses `^[0-9]+\.[0-9]{2}$` into cents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = s
            .split_once('.')
            .ok_or(MoneyParseError::MissingDecimalPoint)?;

        if whole.is_empty() {
            return Err(MoneyParseError::MissingDollars);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MoneyParseError::NonNumeric);
        }
        if fraction.len() != 2 {
            return Err(MoneyParseError::FractionDigits(fraction.len()));
        }

        let dollars = whole
            .bytes()
            .try_fold(0i64, |acc, b| {
                acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
            })
            .ok_or(MoneyParseError::Overflow)?;
        let cents = i64::from(fraction.as_bytes()[0] - b'0') * 10
            + i64::from(fraction.as_bytes()[1] - b'0');

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Money)
            .ok_or(MoneyParseError::Overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the wire form: `35.35`, `9.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
