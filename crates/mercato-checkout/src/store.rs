//! # Inventory Store Interface
//!
//! The narrow interface the coordinator consumes. Defined here, on the
//! consumer side, so storage backends (SQLite today, anything tomorrow) are
//! injected as explicit dependencies and unit tests run against an
//! in-process fake.
//!
//! ## Outcome Types, Not Error Sniffing
//! The original dispatch between the atomic and fallback paths hinged on
//! inspecting a caught error's text ("function does not exist"). Here the
//! structural cases are closed enum variants:
//!
//! - [`AtomicOutcome`]: `Committed | Rejected | Unavailable`
//! - [`StockDecrement`]: `Applied | Insufficient | Missing`
//!
//! A transport-level failure is the only thing left to `Err(StoreError)`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use mercato_core::{Money, Product, RuleViolation, Sale, SaleDraft};

// =============================================================================
// Store Error
// =============================================================================

/// Storage-layer failures.
///
/// These are the only conditions the coordinator surfaces as retryable:
/// nothing here is a business decision, so the caller may simply try again.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A query failed at the storage layer.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// The store connection is unusable (pool exhausted, closed, ...).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A record insert could not be shaped to the store's schema, even
    /// after the compensating retry without the discount field.
    #[error("schema mismatch on {field}: {detail}")]
    SchemaMismatch { field: String, detail: String },

    /// Anything else.
    #[error("internal store error: {0}")]
    Internal(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Typed Outcomes
// =============================================================================

/// Result of invoking the store's all-or-nothing sale procedure.
#[derive(Debug, Clone)]
pub enum AtomicOutcome {
    /// The procedure validated stock, decremented it, and inserted the sale
    /// in one unit. The returned Sale is the persisted record.
    Committed(Sale),

    /// The procedure ran and rejected the sale on business grounds. This is
    /// authoritative: the coordinator must NOT re-run the fallback, which
    /// would re-evaluate the rules against possibly-changed state.
    Rejected(RuleViolation),

    /// The procedure does not exist in this deployment. Expected in stores
    /// provisioned without it; triggers the fallback path and is never
    /// surfaced to the caller.
    Unavailable,
}

/// Result of a conditional stock decrement
/// (`stock = stock - qty WHERE stock >= qty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDecrement {
    /// The decrement applied; `remaining` is the stock left afterwards.
    Applied { remaining: i64 },

    /// The guard failed: stock moved below the requested quantity between
    /// validation and decrement. `available` is the stock seen after the
    /// failed update.
    Insufficient { available: i64 },

    /// The product row is gone.
    Missing,
}

// =============================================================================
// The Trait
// =============================================================================

/// The record store holding products and sales.
///
/// ## Contract
/// - [`decrement_stock`](InventoryStore::decrement_stock) must be
///   conditional: two concurrent checkouts must never both succeed in
///   overselling the same unit of stock, even on this degraded path.
/// - [`insert_sale`](InventoryStore::insert_sale) must be schema-tolerant:
///   a store whose sales schema lacks the discount column still accepts the
///   record (persisting without the field), and the returned [`Sale`] always
///   carries the draft's discount so the caller-visible response is correct.
/// - [`atomic_sale`](InventoryStore::atomic_sale) reports structural
///   unavailability through [`AtomicOutcome::Unavailable`], never through
///   `Err`.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Reads a product by id. `None` when it does not exist.
    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Conditionally decrements stock for one product.
    async fn decrement_stock(&self, id: &str, quantity: i64) -> StoreResult<StockDecrement>;

    /// Inserts a fully-priced sale record.
    async fn insert_sale(&self, draft: &SaleDraft) -> StoreResult<Sale>;

    /// Invokes the all-or-nothing sale procedure, if this deployment has it.
    async fn atomic_sale(
        &self,
        cart: &[mercato_core::CartLine],
        discount: mercato_core::DiscountRate,
    ) -> StoreResult<AtomicOutcome>;

    /// All sales, most recent first.
    async fn sales_newest_first(&self) -> StoreResult<Vec<Sale>>;

    /// Sum of sale totals with `created_at >= since`.
    async fn sum_totals_since(&self, since: DateTime<Utc>) -> StoreResult<Money>;
}
