//! # Fake Inventory Store
//!
//! In-process [`InventoryStore`] used by the coordinator and report tests.
//!
//! The fake mirrors the semantics the real store is contracted to provide
//! (conditional decrements, schema-tolerant inserts, typed atomic outcomes)
//! and adds scripting hooks: atomic unavailability, a missing discount
//! column, failing inserts, and stock stolen mid-flight to provoke the late
//! insufficient-stock rejection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::store::{AtomicOutcome, InventoryStore, StockDecrement, StoreError, StoreResult};
use mercato_core::{
    compute_totals, CartLine, DiscountRate, Money, PricedLine, Product, RuleViolation, Sale,
    SaleDraft, SaleLine,
};

#[derive(Default)]
pub struct FakeStore {
    products: Mutex<HashMap<String, Product>>,
    sales: Mutex<Vec<Sale>>,
    /// Stock to remove right before a decrement, keyed by product id.
    /// Simulates a concurrent checkout winning the race.
    pending_steals: Mutex<HashMap<String, i64>>,

    atomic_available: bool,
    has_discount_column: bool,
    fail_inserts: bool,

    reads: AtomicUsize,
    fallback_decrements: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        FakeStore {
            atomic_available: true,
            has_discount_column: true,
            ..Default::default()
        }
    }

    // ---- scripting ------------------------------------------------------

    pub fn without_atomic(mut self) -> Self {
        self.atomic_available = false;
        self
    }

    pub fn without_discount_column(mut self) -> Self {
        self.has_discount_column = false;
        self
    }

    pub fn failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    pub fn add_product(&self, id: &str, name: &str, price_cents: i64, stock: i64) {
        let now = Utc::now();
        self.products.lock().unwrap().insert(
            id.to_string(),
            Product {
                id: id.to_string(),
                name: name.to_string(),
                price_cents,
                stock,
                created_at: now,
                updated_at: now,
            },
        );
    }

    pub fn add_sale(&self, total_cents: i64, created_at: DateTime<Utc>) {
        let mut sales = self.sales.lock().unwrap();
        let id = format!("sale-{}", sales.len());
        sales.push(Sale {
            id,
            created_at,
            subtotal_cents: total_cents,
            total_cents,
            discount_bps: 0,
            lines: vec![],
        });
    }

    pub fn steal_stock_before_decrement(&self, id: &str, amount: i64) {
        self.pending_steals
            .lock()
            .unwrap()
            .insert(id.to_string(), amount);
    }

    // ---- inspection ------------------------------------------------------

    pub fn stock_of(&self, id: &str) -> Option<i64> {
        self.products.lock().unwrap().get(id).map(|p| p.stock)
    }

    pub fn sale_count(&self) -> usize {
        self.sales.lock().unwrap().len()
    }

    /// The discount value actually persisted for a sale (None if missing).
    pub fn persisted_discount_of(&self, sale_id: &str) -> Option<u32> {
        self.sales
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == sale_id)
            .map(|s| s.discount_bps)
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn fallback_decrement_count(&self) -> usize {
        self.fallback_decrements.load(Ordering::Relaxed)
    }

    fn apply_pending_steal(&self, id: &str) {
        if let Some(amount) = self.pending_steals.lock().unwrap().remove(id) {
            if let Some(p) = self.products.lock().unwrap().get_mut(id) {
                p.stock = (p.stock - amount).max(0);
            }
        }
    }
}

#[async_trait]
impl InventoryStore for FakeStore {
    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(self.products.lock().unwrap().get(id).cloned())
    }

    async fn decrement_stock(&self, id: &str, quantity: i64) -> StoreResult<StockDecrement> {
        self.fallback_decrements.fetch_add(1, Ordering::Relaxed);
        self.apply_pending_steal(id);

        let mut products = self.products.lock().unwrap();
        match products.get_mut(id) {
            None => Ok(StockDecrement::Missing),
            Some(p) if p.stock >= quantity => {
                p.stock -= quantity;
                Ok(StockDecrement::Applied { remaining: p.stock })
            }
            Some(p) => Ok(StockDecrement::Insufficient { available: p.stock }),
        }
    }

    async fn insert_sale(&self, draft: &SaleDraft) -> StoreResult<Sale> {
        if self.fail_inserts {
            return Err(StoreError::QueryFailed("insert failed (scripted)".to_string()));
        }

        let mut persisted = draft.clone().into_sale();
        if !self.has_discount_column {
            // Legacy schema: the column simply isn't stored.
            persisted.discount_bps = 0;
        }
        self.sales.lock().unwrap().push(persisted);

        // Contract: the caller-visible Sale always carries the draft's
        // discount, persisted or not.
        Ok(draft.clone().into_sale())
    }

    async fn atomic_sale(
        &self,
        cart: &[CartLine],
        discount: DiscountRate,
    ) -> StoreResult<AtomicOutcome> {
        if !self.atomic_available {
            return Ok(AtomicOutcome::Unavailable);
        }

        let mut products = self.products.lock().unwrap();

        // Validate everything before mutating anything, aggregating
        // quantities per product id so repeated lines cannot oversell.
        let mut requested: HashMap<String, i64> = HashMap::new();
        for line in cart {
            match products.get(&line.product_id) {
                None => {
                    return Ok(AtomicOutcome::Rejected(RuleViolation::ProductNotFound {
                        product_id: line.product_id.clone(),
                    }))
                }
                Some(p) => {
                    let total = requested.entry(line.product_id.clone()).or_insert(0);
                    *total += line.quantity;
                    if p.stock < *total {
                        return Ok(AtomicOutcome::Rejected(RuleViolation::InsufficientStock {
                            name: p.name.clone(),
                            available: p.stock,
                            requested: *total,
                        }));
                    }
                }
            }
        }

        let lines: Vec<SaleLine> = cart
            .iter()
            .map(|line| SaleLine::snapshot(&products[&line.product_id], line.quantity))
            .collect();

        for line in cart {
            products.get_mut(&line.product_id).unwrap().stock -= line.quantity;
        }

        let priced: Vec<PricedLine> = lines
            .iter()
            .map(|l| PricedLine::new(l.unit_price(), l.quantity))
            .collect();
        let totals = compute_totals(&priced, discount)
            .map_err(|e| StoreError::Internal(e.to_string()))?;

        let sale = Sale {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            subtotal_cents: totals.subtotal.cents(),
            total_cents: totals.total.cents(),
            discount_bps: discount.bps(),
            lines,
        };
        self.sales.lock().unwrap().push(sale.clone());
        Ok(AtomicOutcome::Committed(sale))
    }

    async fn sales_newest_first(&self) -> StoreResult<Vec<Sale>> {
        let mut sales = self.sales.lock().unwrap().clone();
        sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sales)
    }

    async fn sum_totals_since(&self, since: DateTime<Utc>) -> StoreResult<Money> {
        let cents = self
            .sales
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.created_at >= since)
            .map(|s| s.total_cents)
            .sum();
        Ok(Money::from_cents(cents))
    }
}
