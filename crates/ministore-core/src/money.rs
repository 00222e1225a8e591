//! # Money Module
//!
//! Provides the `Money` type for prices, subtotals and the sales total.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    3 × 1.10 = 3.3000000000000003  ❌ total drifts from the receipts    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 110 cents = 330 cents, exactly                                   │
//! │    The sales total is always the exact sum of the subtotals            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ministore_core::money::Money;
//!
//! let price = Money::from_cents(120); // $1.20
//! let subtotal = price.checked_multiply_quantity(2).unwrap();
//! assert_eq!(subtotal.cents(), 240);
//! assert_eq!(subtotal.format_decimals(1), "2.4");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Number of minor units in one major unit.
pub const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Serializes as a plain integer number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use ministore_core::money::Money;
    ///
    /// let price = Money::from_cents(250); // Represents $2.50
    /// assert_eq!(price.cents(), 250);
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

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Bread $1.20
    /// Quantity: 2
    ///      │
    ///      ▼
    /// checked_multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: $2.40
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats the amount with a fixed number of decimal places (0 to 2).
    ///
    /// Uses a period as decimal separator, no grouping, and rounds half to
    /// even when digits are dropped.
    ///
    /// ## Example
    /// ```rust
    /// use ministore_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(250).format_decimals(1), "2.5");
    /// assert_eq!(Money::from_cents(245).format_decimals(1), "2.4");
    /// assert_eq!(Money::from_cents(255).format_decimals(1), "2.6");
    /// assert_eq!(Money::from_cents(1099).format_decimals(2), "10.99");
    /// ```
    pub fn format_decimals(&self, decimals: u8) -> String {
        let decimals = u32::from(decimals.min(2));
        let divisor = 10_u64.pow(2 - decimals);
        let abs = self.0.unsigned_abs();

        let mut scaled = abs / divisor;
        if divisor > 1 {
            let remainder = abs % divisor;
            // Round half to even
            if remainder * 2 > divisor || (remainder * 2 == divisor && scaled % 2 == 1) {
                scaled += 1;
            }
        }

        let sign = if self.0 < 0 && scaled != 0 { "-" } else { "" };
        if decimals == 0 {
            return format!("{sign}{scaled}");
        }

        let unit = 10_u64.pow(decimals);
        format!(
            "{sign}{}.{:0width$}",
            scaled / unit,
            scaled % unit,
            width = decimals as usize
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a dollar sign and two decimals.
///
/// ## Note
/// The terminal uses [`Money::format_decimals`] with the configured symbol
/// and precision; this is for logs and error messages.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
