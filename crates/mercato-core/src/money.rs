//! # Money Module
//!
//! Provides the `Money` and `DiscountRate` types for handling monetary
//! values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Subtotals accumulate exactly; the only rounding step is the      │
//! │    final discount application, and it is explicit.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mercato_core::money::{DiscountRate, Money};
//!
//! let price = Money::from_cents(1000);               // $10.00
//! let line_total = price.multiply_quantity(2);       // $20.00
//! let rate = DiscountRate::from_bps(1000);           // 10%
//! assert_eq!(line_total.apply_discount(rate).cents(), 1800); // $18.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction (savings) must not underflow silently
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns. The
    /// database, calculations, and API all use cents; only a UI converts to
    /// major units for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use mercato_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity (line subtotals).
    ///
    /// ## Example
    /// ```rust
    /// use mercato_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// This is the single rounding step of the pricing pipeline: the
    /// discount amount is computed in i128 and rounded half-up before the
    /// subtraction, so the result is exact to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use mercato_core::money::{DiscountRate, Money};
    ///
    /// let subtotal = Money::from_cents(10000);           // $100.00
    /// let rate = DiscountRate::from_bps(1000);           // 10%
    /// assert_eq!(subtotal.apply_discount(rate).cents(), 9000);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        if rate.is_zero() {
            return *self;
        }
        // i128 to prevent overflow on large amounts
        let discount_amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(self.0 - discount_amount as i64)
    }
}

/// Display implementation shows money in a human-readable format.
///
/// For debugging and log output; real UI formatting is localized elsewhere.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage discount represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so fractional percentages stay exact:
/// 1050 bps = 10.5%. A full discount is 10000 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Full discount, 100%.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);
    }

    #[test]
    fn test_discount_basic() {
        let subtotal = Money::from_cents(10000); // $100.00
        let rate = DiscountRate::from_bps(1000); // 10%
        assert_eq!(subtotal.apply_discount(rate).cents(), 9000);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // $0.25 at 10% = 2.5 cents discount → rounds to 3 cents off
        let amount = Money::from_cents(25);
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(amount.apply_discount(rate).cents(), 22);
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let amount = Money::from_cents(1234);
        assert_eq!(amount.apply_discount(DiscountRate::zero()), amount);
    }

    #[test]
    fn test_full_discount() {
        let amount = Money::from_cents(1234);
        let free = amount.apply_discount(DiscountRate::from_bps(DiscountRate::MAX_BPS));
        assert!(free.is_zero());
    }

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(format!("{}", DiscountRate::from_bps(1050)), "10.5%");
    }
}
