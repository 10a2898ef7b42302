//! # Sale Transaction Coordinator
//!
//! Orchestrates validation → pricing → commit for a checkout, choosing
//! between the atomic commit path and the sequential fallback.
//!
//! ## Why Two Paths?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ATOMIC PATH (preferred)                                            │
//! │    One store call. The store validates stock, decrements it and     │
//! │    inserts the sale in a single all-or-nothing unit. Concurrency    │
//! │    control is entirely the store's job.                             │
//! │                                                                     │
//! │  FALLBACK PATH (degraded)                                           │
//! │    Used only when the atomic procedure is structurally missing.     │
//! │    Multiple sequential round trips: validate reads, conditional     │
//! │    decrements, final insert. The decrements are guarded             │
//! │    (stock = stock - q WHERE stock >= q), so stock still never goes  │
//! │    negative, but a crash between decrement and insert leaves stock  │
//! │    reduced without a sale row. That window is inherent to this      │
//! │    path and is why the atomic path wins whenever available.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is never checked during validation: it is a racy value and is only
//! meaningful at the moment of decrement, inside whichever commit path runs.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::CheckoutError;
use crate::store::{AtomicOutcome, InventoryStore, StockDecrement};
use mercato_core::{
    compute_totals, validation, CartLine, PricedLine, Product, RuleViolation, Sale, SaleDraft,
    SaleLine,
};

/// Coordinates sale commits against an injected [`InventoryStore`].
///
/// ## Usage
/// ```rust,ignore
/// let coordinator = SaleCoordinator::new(store);
/// let sale = coordinator
///     .commit_sale(&[CartLine::new(product_id, 2)], Some(10.0))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SaleCoordinator<S> {
    store: S,
}

impl<S: InventoryStore> SaleCoordinator<S> {
    /// Creates a coordinator over the given store.
    pub fn new(store: S) -> Self {
        SaleCoordinator { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Commits a sale: the `POST /sales` equivalent.
    ///
    /// ## Arguments
    /// * `cart` - the (product, quantity) pairs to sell
    /// * `discount_percent` - optional percentage in `[0, 100]`; absent
    ///   means no discount
    ///
    /// ## Errors
    /// - [`CheckoutError::Invalid`] - malformed request; store untouched
    /// - [`CheckoutError::Rejected`] - unknown product or insufficient
    ///   stock, naming the offender; authoritative, never retried here
    /// - [`CheckoutError::Storage`] - storage failure; retryable by caller
    pub async fn commit_sale(
        &self,
        cart: &[CartLine],
        discount_percent: Option<f64>,
    ) -> Result<Sale, CheckoutError> {
        // Validating: structural checks only. Stock is deliberately not
        // read here; see the module docs.
        validation::validate_cart(cart)?;
        let discount = validation::validate_discount_percent(discount_percent.unwrap_or(0.0))?;

        debug!(lines = cart.len(), discount = %discount, "Attempting atomic commit");

        // AttemptAtomic
        match self.store.atomic_sale(cart, discount).await? {
            AtomicOutcome::Committed(sale) => {
                info!(sale_id = %sale.id, total = %sale.total(), "Sale committed (atomic)");
                Ok(sale)
            }
            AtomicOutcome::Rejected(violation) => {
                // Authoritative. Re-running the fallback here could
                // double-apply decrements or mask the true stock state.
                debug!(%violation, "Atomic path rejected sale");
                Err(violation.into())
            }
            AtomicOutcome::Unavailable => {
                warn!("Atomic sale procedure unavailable, using sequential fallback");
                self.commit_fallback(cart, discount).await
            }
        }
    }

    /// The sequential fallback commit.
    ///
    /// Validation reads happen before any write, so an abort in that pass
    /// leaves the store untouched. After the first decrement the
    /// transaction is no longer unwindable; a late rejection or insert
    /// failure is reported but earlier decrements stand.
    async fn commit_fallback(
        &self,
        cart: &[CartLine],
        discount: mercato_core::DiscountRate,
    ) -> Result<Sale, CheckoutError> {
        // (a) Validate every line against current stock. No writes yet.
        // Quantities are aggregated per product id: a cart repeating a
        // product would otherwise pass line-by-line validation and only
        // fail at the second guarded decrement, with the first standing.
        let mut products: Vec<Product> = Vec::with_capacity(cart.len());
        let mut requested: HashMap<String, i64> = HashMap::new();
        for line in cart {
            let product = self
                .store
                .get_product(&line.product_id)
                .await?
                .ok_or_else(|| RuleViolation::ProductNotFound {
                    product_id: line.product_id.clone(),
                })?;

            let total = requested.entry(line.product_id.clone()).or_insert(0);
            *total += line.quantity;
            if !product.can_sell(*total) {
                return Err(RuleViolation::InsufficientStock {
                    name: product.name,
                    available: product.stock,
                    requested: *total,
                }
                .into());
            }

            products.push(product);
        }

        // (b) Snapshot lines and price the cart.
        let lines: Vec<SaleLine> = cart
            .iter()
            .zip(&products)
            .map(|(line, product)| SaleLine::snapshot(product, line.quantity))
            .collect();

        let priced: Vec<PricedLine> = lines
            .iter()
            .map(|l| PricedLine::new(l.unit_price(), l.quantity))
            .collect();
        let totals = compute_totals(&priced, discount)?;

        // (c) Conditional decrements. The guard re-checks stock at the
        // moment of the write, closing the validate-then-write race of the
        // naive sequential scheme.
        for (line, product) in cart.iter().zip(&products) {
            match self
                .store
                .decrement_stock(&line.product_id, line.quantity)
                .await?
            {
                StockDecrement::Applied { remaining } => {
                    debug!(product_id = %line.product_id, remaining, "Stock decremented");
                }
                StockDecrement::Insufficient { available } => {
                    // Stock moved after validation. Earlier lines in this
                    // cart have already been decremented and stand; see the
                    // module docs for the inconsistency window.
                    warn!(product_id = %line.product_id, available, "Late insufficient stock");
                    return Err(RuleViolation::InsufficientStock {
                        name: product.name.clone(),
                        available,
                        requested: line.quantity,
                    }
                    .into());
                }
                StockDecrement::Missing => {
                    warn!(product_id = %line.product_id, "Product vanished before decrement");
                    return Err(RuleViolation::ProductNotFound {
                        product_id: line.product_id.clone(),
                    }
                    .into());
                }
            }
        }

        // (d/e) Insert the sale. Stock is already decremented, so the store
        // must not unwind on schema drift; it only adapts the insert shape
        // and still reports the draft's discount back.
        let draft = SaleDraft {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            subtotal_cents: totals.subtotal.cents(),
            total_cents: totals.total.cents(),
            discount_bps: discount.bps(),
            lines,
        };

        let sale = self.store.insert_sale(&draft).await?;
        info!(sale_id = %sale.id, total = %sale.total(), "Sale committed (fallback)");
        Ok(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
