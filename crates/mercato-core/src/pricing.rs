//! # Pricing Engine
//!
//! Computes line subtotals and the discounted grand total for a checkout.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Pricing Pipeline                              │
//! │                                                                     │
//! │  [(unit_price, qty), ...]                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  subtotal = Σ(unit_price × qty)     ← exact integer cents           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  total = subtotal − round(subtotal × bps / 10000)                   │
//! │       │                              ↑ the ONLY rounding step       │
//! │       ▼                                                             │
//! │  savings = subtotal − total                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure functions only: no I/O, no clock, no store access. The engine never
//! fails except on malformed input (non-positive quantity, negative price).

use crate::error::{CoreResult, ValidationError};
use crate::money::{DiscountRate, Money};

// =============================================================================
// Inputs / Outputs
// =============================================================================

/// A priced line as input to the engine: unit price and quantity.
///
/// The coordinator builds these from product snapshots; the engine itself
/// neither knows nor cares which product a line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLine {
    pub unit_price: Money,
    pub quantity: i64,
}

impl PricedLine {
    pub const fn new(unit_price: Money, quantity: i64) -> Self {
        PricedLine {
            unit_price,
            quantity,
        }
    }

    /// Line subtotal in exact cents.
    #[inline]
    pub const fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The engine's result: pre-discount subtotal, grand total, and savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Money,
    pub total: Money,
    pub savings: Money,
}

// =============================================================================
// Engine
// =============================================================================

/// Computes the subtotal, discounted grand total and savings for a cart.
///
/// ## Guarantees
/// - `subtotal` accumulates exactly, with no intermediate rounding
/// - `total == subtotal` when the discount is zero
/// - `savings == subtotal − total`, always non-negative for valid rates
///
/// ## Errors
/// [`ValidationError::NonPositiveQuantity`] for a zero/negative quantity,
/// [`ValidationError::NegativeUnitPrice`] for a negative price. Both are
/// malformed-input conditions; the engine has no other failure mode.
///
/// ## Example
/// ```rust
/// use mercato_core::money::{DiscountRate, Money};
/// use mercato_core::pricing::{compute_totals, PricedLine};
///
/// let lines = [PricedLine::new(Money::from_cents(1000), 2)];
/// let totals = compute_totals(&lines, DiscountRate::from_bps(1000)).unwrap();
/// assert_eq!(totals.subtotal.cents(), 2000);
/// assert_eq!(totals.total.cents(), 1800);
/// assert_eq!(totals.savings.cents(), 200);
/// ```
pub fn compute_totals(lines: &[PricedLine], discount: DiscountRate) -> CoreResult<Totals> {
    let mut subtotal = Money::zero();

    for line in lines {
        if line.quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity {
                product_id: String::new(),
                quantity: line.quantity,
            });
        }
        if line.unit_price.is_negative() {
            return Err(ValidationError::NegativeUnitPrice {
                cents: line.unit_price.cents(),
            });
        }
        subtotal += line.subtotal();
    }

    let total = subtotal.apply_discount(discount);

    Ok(Totals {
        subtotal,
        total,
        savings: subtotal - total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
