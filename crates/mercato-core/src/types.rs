//! # Domain Types
//!
//! Core domain types used throughout Mercato POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │    CartLine    │   │      Sale      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  product_id    │   │  id (UUID)     │      │
//! │  │  name          │   │  quantity      │   │  total_cents   │      │
//! │  │  price_cents   │   └────────────────┘   │  discount_bps  │      │
//! │  │  stock         │                        │  lines         │      │
//! │  └────────────────┘                        └────────────────┘      │
//! │                                                                     │
//! │  CartLine is INPUT ONLY; SaleLine is the frozen snapshot a Sale    │
//! │  keeps of the product at the instant it was committed.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::{DiscountRate, Money};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Owned by the inventory store; `stock` is mutated only through the
/// checkout commit paths (and unrelated catalog editing).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Current stock level. Never negative in committed state.
    pub stock: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One (product, quantity) pair of a checkout request. Input only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    /// Must be a positive integer; validated before any store access.
    pub quantity: i64,
}

impl CartLine {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        CartLine {
            product_id: product_id.into(),
            quantity,
        }
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// A line item in a committed sale.
///
/// Uses the snapshot pattern to freeze product data at the time of sale:
/// later price or name edits never rewrite sale history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub name_snapshot: String,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Quantity sold.
    pub quantity: i64,
    /// Line subtotal (unit_price × quantity), before discount.
    pub subtotal_cents: i64,
}

impl SaleLine {
    /// Builds the frozen snapshot for `quantity` units of `product`.
    pub fn snapshot(product: &Product, quantity: i64) -> Self {
        SaleLine {
            product_id: product.id.clone(),
            name_snapshot: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            subtotal_cents: product.price().multiply_quantity(quantity).cents(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A committed sale transaction.
///
/// Created exactly once per successful checkout; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    /// Commit time.
    pub created_at: DateTime<Utc>,
    /// Sum of line subtotals, before discount.
    pub subtotal_cents: i64,
    /// Post-discount grand total.
    pub total_cents: i64,
    /// Discount applied, in basis points (1000 = 10%).
    pub discount_bps: u32,
    /// Frozen line snapshots.
    pub lines: Vec<SaleLine>,
}

impl Sale {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the discount rate.
    #[inline]
    pub fn discount(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_bps)
    }
}

// =============================================================================
// Sale Draft
// =============================================================================

/// The fully-priced, not-yet-persisted shape handed to the store's insert.
///
/// Identical to [`Sale`] field-for-field; the distinction exists so the type
/// system separates "what the coordinator computed" from "what the store
/// durably accepted".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDraft {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub subtotal_cents: i64,
    pub total_cents: i64,
    pub discount_bps: u32,
    pub lines: Vec<SaleLine>,
}

impl SaleDraft {
    /// Converts the draft into the committed Sale it was persisted as.
    pub fn into_sale(self) -> Sale {
        Sale {
            id: self.id,
            created_at: self.created_at,
            subtotal_cents: self.subtotal_cents,
            total_cents: self.total_cents,
            discount_bps: self.discount_bps,
            lines: self.lines,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_cents: i64, stock: i64) -> Product {
        let now = Utc::now();
        Product {
            id: "p1".to_string(),
            name: "Coca-Cola 330ml".to_string(),
            price_cents,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_can_sell() {
        let p = product(299, 3);
        assert!(p.can_sell(3));
        assert!(!p.can_sell(4));
    }

    #[test]
    fn test_sale_line_snapshot() {
        let p = product(1000, 5);
        let line = SaleLine::snapshot(&p, 2);
        assert_eq!(line.product_id, "p1");
        assert_eq!(line.name_snapshot, "Coca-Cola 330ml");
        assert_eq!(line.unit_price_cents, 1000);
        assert_eq!(line.subtotal_cents, 2000);
    }

    #[test]
    fn test_draft_into_sale_preserves_fields() {
        let draft = SaleDraft {
            id: "s1".to_string(),
            created_at: Utc::now(),
            subtotal_cents: 2000,
            total_cents: 1800,
            discount_bps: 1000,
            lines: vec![],
        };
        let sale = draft.clone().into_sale();
        assert_eq!(sale.id, draft.id);
        assert_eq!(sale.total_cents, 1800);
        assert_eq!(sale.discount().bps(), 1000);
    }
}
