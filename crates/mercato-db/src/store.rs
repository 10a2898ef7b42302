//! # SQLite Inventory Store
//!
//! The SQLite implementation of the coordinator's
//! [`InventoryStore`](mercato_checkout::InventoryStore) trait.
//!
//! ## Commit Paths, Storage View
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  atomic_sale (one transaction)                                      │
//! │    BEGIN                                                            │
//! │      read + validate every product                                  │
//! │      UPDATE products SET stock = stock - q                          │
//! │        WHERE id = ? AND stock >= q      ← guard per line            │
//! │      INSERT sale + lines                                            │
//! │    COMMIT            any rejection → ROLLBACK, nothing happened     │
//! │                                                                     │
//! │  fallback primitives (separate statements)                          │
//! │    decrement_stock: same guarded UPDATE, own round trip             │
//! │    insert_sale:     schema-tolerant (see below)                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Column Drift
//! Legacy deployments may run a sales schema without `discount_bps`. The
//! column's presence is probed once at store construction and cached; when
//! absent, inserts and selects simply omit it. If an insert still trips
//! over the column (a schema change after the probe), the error text is
//! matched case-insensitively, the capability is downgraded, and the insert
//! is retried once without the field. Either way the caller-visible [`Sale`]
//! carries the draft's discount.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use mercato_checkout::{AtomicOutcome, InventoryStore, StockDecrement, StoreError, StoreResult};
use mercato_core::{
    compute_totals, CartLine, DiscountRate, Money, PricedLine, Product, RuleViolation, Sale,
    SaleDraft, SaleLine,
};

// =============================================================================
// Row Mappings
// =============================================================================

/// A sales-table row; lines are joined in separately.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: String,
    created_at: DateTime<Utc>,
    subtotal_cents: i64,
    total_cents: i64,
    discount_bps: u32,
}

#[derive(Debug, sqlx::FromRow)]
struct LineRow {
    sale_id: String,
    product_id: String,
    name_snapshot: String,
    unit_price_cents: i64,
    quantity: i64,
    subtotal_cents: i64,
}

const PRODUCT_COLUMNS: &str = "id, name, price_cents, stock, created_at, updated_at";

// =============================================================================
// Store
// =============================================================================

/// SQLite-backed inventory store. Cheap to clone; clones share the pool and
/// the probed schema capability.
#[derive(Debug, Clone)]
pub struct SqliteInventoryStore {
    pool: SqlitePool,
    /// Whether this deployment offers the all-or-nothing sale procedure.
    atomic_commits: bool,
    /// Whether the sales schema has the discount column. Probed once at
    /// construction; downgraded at runtime if an insert proves otherwise.
    sales_has_discount: Arc<AtomicBool>,
}

impl SqliteInventoryStore {
    /// Builds the store over an existing pool, probing the sales schema
    /// once for the discount column.
    pub async fn new(pool: SqlitePool, atomic_commits: bool) -> DbResult<Self> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pragma_table_info('sales') WHERE name = 'discount_bps'",
        )
        .fetch_one(&pool)
        .await?;

        let has_discount = count > 0;
        if !has_discount {
            warn!("sales schema lacks the discount column; inserts will omit it");
        }
        debug!(atomic_commits, has_discount, "Inventory store ready");

        Ok(SqliteInventoryStore {
            pool,
            atomic_commits,
            sales_has_discount: Arc::new(AtomicBool::new(has_discount)),
        })
    }

    /// Inserts a new product (catalog editing and seeding).
    pub async fn insert_product(
        &self,
        name: &str,
        price_cents: i64,
        stock: i64,
    ) -> DbResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price_cents,
            stock,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO products (id, name, price_cents, stock, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        debug!(id = %product.id, name = %product.name, "Product inserted");
        Ok(product)
    }

    /// Number of products in the catalog.
    pub async fn count_products(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    #[cfg(test)]
    fn force_discount_flag(&self, value: bool) {
        self.sales_has_discount.store(value, Ordering::Relaxed);
    }

    fn sale_columns(&self) -> &'static str {
        if self.sales_has_discount.load(Ordering::Relaxed) {
            "id, created_at, subtotal_cents, total_cents, discount_bps"
        } else {
            "id, created_at, subtotal_cents, total_cents, 0 AS discount_bps"
        }
    }

    /// Writes the sale row and its lines on the given transaction.
    async fn insert_sale_rows(
        tx: &mut Transaction<'_, Sqlite>,
        draft: &SaleDraft,
        with_discount: bool,
    ) -> Result<(), sqlx::Error> {
        if with_discount {
            sqlx::query(
                "INSERT INTO sales (id, created_at, subtotal_cents, total_cents, discount_bps) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(&draft.id)
            .bind(draft.created_at)
            .bind(draft.subtotal_cents)
            .bind(draft.total_cents)
            .bind(draft.discount_bps)
            .execute(&mut **tx)
            .await?;
        } else {
            sqlx::query(
                "INSERT INTO sales (id, created_at, subtotal_cents, total_cents) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(&draft.id)
            .bind(draft.created_at)
            .bind(draft.subtotal_cents)
            .bind(draft.total_cents)
            .execute(&mut **tx)
            .await?;
        }

        for line in &draft.lines {
            sqlx::query(
                "INSERT INTO sale_lines \
                 (id, sale_id, product_id, name_snapshot, unit_price_cents, quantity, subtotal_cents) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&draft.id)
            .bind(&line.product_id)
            .bind(&line.name_snapshot)
            .bind(line.unit_price_cents)
            .bind(line.quantity)
            .bind(line.subtotal_cents)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// One full insert attempt in its own transaction.
    async fn try_insert_sale(&self, draft: &SaleDraft, with_discount: bool) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        Self::insert_sale_rows(&mut tx, draft, with_discount).await?;
        tx.commit().await
    }

    /// One full atomic-commit attempt in its own transaction.
    async fn atomic_attempt(
        &self,
        cart: &[CartLine],
        discount: DiscountRate,
        with_discount: bool,
    ) -> Result<AtomicOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // Validate everything before mutating anything.
        let mut products: Vec<Product> = Vec::with_capacity(cart.len());
        for line in cart {
            let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
            let product: Option<Product> = sqlx::query_as(&sql)
                .bind(&line.product_id)
                .fetch_optional(&mut *tx)
                .await?;

            match product {
                None => {
                    tx.rollback().await?;
                    return Ok(AtomicOutcome::Rejected(RuleViolation::ProductNotFound {
                        product_id: line.product_id.clone(),
                    }));
                }
                Some(p) if p.stock < line.quantity => {
                    tx.rollback().await?;
                    return Ok(AtomicOutcome::Rejected(RuleViolation::InsufficientStock {
                        name: p.name,
                        available: p.stock,
                        requested: line.quantity,
                    }));
                }
                Some(p) => products.push(p),
            }
        }

        // Guarded decrements. The guard stays even inside the transaction:
        // under WAL the validation reads above may predate this
        // transaction's write lock, so stock is re-checked at the write.
        for (line, product) in cart.iter().zip(&products) {
            let result = sqlx::query(
                "UPDATE products SET stock = stock - ?2, updated_at = ?3 \
                 WHERE id = ?1 AND stock >= ?2",
            )
            .bind(&line.product_id)
            .bind(line.quantity)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                let available: Option<i64> =
                    sqlx::query_scalar("SELECT stock FROM products WHERE id = ?1")
                        .bind(&line.product_id)
                        .fetch_optional(&mut *tx)
                        .await?;
                tx.rollback().await?;

                return Ok(match available {
                    Some(available) => AtomicOutcome::Rejected(RuleViolation::InsufficientStock {
                        name: product.name.clone(),
                        available,
                        requested: line.quantity,
                    }),
                    None => AtomicOutcome::Rejected(RuleViolation::ProductNotFound {
                        product_id: line.product_id.clone(),
                    }),
                });
            }
        }

        let lines: Vec<SaleLine> = cart
            .iter()
            .zip(&products)
            .map(|(line, product)| SaleLine::snapshot(product, line.quantity))
            .collect();

        let priced: Vec<PricedLine> = lines
            .iter()
            .map(|l| PricedLine::new(l.unit_price(), l.quantity))
            .collect();
        // Quantities were validated against stock above; pricing cannot
        // reject them, so any error here is a genuine internal fault.
        let totals = compute_totals(&priced, discount)
            .map_err(|e| sqlx::Error::Protocol(e.to_string()))?;

        let draft = SaleDraft {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            subtotal_cents: totals.subtotal.cents(),
            total_cents: totals.total.cents(),
            discount_bps: discount.bps(),
            lines,
        };

        Self::insert_sale_rows(&mut tx, &draft, with_discount).await?;
        tx.commit().await?;

        Ok(AtomicOutcome::Committed(draft.into_sale()))
    }
}

/// True when an insert failure names the discount column.
fn mentions_discount_column(err: &sqlx::Error) -> bool {
    let msg = match err.as_database_error() {
        Some(db_err) => db_err.message().to_lowercase(),
        None => err.to_string().to_lowercase(),
    };
    msg.contains("discount_bps")
}

fn db(err: sqlx::Error) -> StoreError {
    DbError::from(err).into()
}

// =============================================================================
// InventoryStore Implementation
// =============================================================================

#[async_trait]
impl InventoryStore for SqliteInventoryStore {
    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        let product = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db)?;
        Ok(product)
    }

    async fn decrement_stock(&self, id: &str, quantity: i64) -> StoreResult<StockDecrement> {
        let result = sqlx::query(
            "UPDATE products SET stock = stock - ?2, updated_at = ?3 \
             WHERE id = ?1 AND stock >= ?2",
        )
        .bind(id)
        .bind(quantity)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db)?;

        let stock: Option<i64> = sqlx::query_scalar("SELECT stock FROM products WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db)?;

        Ok(match (result.rows_affected(), stock) {
            (1, Some(remaining)) => StockDecrement::Applied { remaining },
            (_, Some(available)) => StockDecrement::Insufficient { available },
            (_, None) => StockDecrement::Missing,
        })
    }

    async fn insert_sale(&self, draft: &SaleDraft) -> StoreResult<Sale> {
        let with_discount = self.sales_has_discount.load(Ordering::Relaxed);

        match self.try_insert_sale(draft, with_discount).await {
            Ok(()) => {}
            Err(err) if with_discount && mentions_discount_column(&err) => {
                // Last-resort drift detection: the schema changed after the
                // probe. Stock may already be decremented by the fallback
                // path, so the insert shape adapts instead of unwinding.
                warn!(error = %err, "Sale insert tripped over discount column, retrying without");
                self.sales_has_discount.store(false, Ordering::Relaxed);
                self.try_insert_sale(draft, false)
                    .await
                    .map_err(|e| StoreError::SchemaMismatch {
                        field: "discount_bps".to_string(),
                        detail: e.to_string(),
                    })?;
            }
            Err(err) => return Err(db(err)),
        }

        debug!(sale_id = %draft.id, "Sale inserted");
        // The caller-visible Sale always carries the draft's discount,
        // persisted or not.
        Ok(draft.clone().into_sale())
    }

    async fn atomic_sale(
        &self,
        cart: &[CartLine],
        discount: DiscountRate,
    ) -> StoreResult<AtomicOutcome> {
        if !self.atomic_commits {
            return Ok(AtomicOutcome::Unavailable);
        }

        let with_discount = self.sales_has_discount.load(Ordering::Relaxed);
        match self.atomic_attempt(cart, discount, with_discount).await {
            Ok(outcome) => Ok(outcome),
            Err(err) if with_discount && mentions_discount_column(&err) => {
                // The rejected transaction rolled back in full, so retrying
                // the whole attempt without the column is safe.
                warn!(error = %err, "Atomic commit tripped over discount column, retrying without");
                self.sales_has_discount.store(false, Ordering::Relaxed);
                self.atomic_attempt(cart, discount, false).await.map_err(db)
            }
            Err(err) => Err(db(err)),
        }
    }

    async fn sales_newest_first(&self) -> StoreResult<Vec<Sale>> {
        let sql = format!(
            "SELECT {} FROM sales ORDER BY created_at DESC",
            self.sale_columns()
        );
        let rows: Vec<SaleRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await.map_err(db)?;

        let line_rows: Vec<LineRow> = sqlx::query_as(
            "SELECT sale_id, product_id, name_snapshot, unit_price_cents, quantity, subtotal_cents \
             FROM sale_lines",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db)?;

        let mut lines_by_sale: HashMap<String, Vec<SaleLine>> = HashMap::new();
        for row in line_rows {
            lines_by_sale.entry(row.sale_id).or_default().push(SaleLine {
                product_id: row.product_id,
                name_snapshot: row.name_snapshot,
                unit_price_cents: row.unit_price_cents,
                quantity: row.quantity,
                subtotal_cents: row.subtotal_cents,
            });
        }

        Ok(rows
            .into_iter()
            .map(|row| Sale {
                lines: lines_by_sale.remove(&row.id).unwrap_or_default(),
                id: row.id,
                created_at: row.created_at,
                subtotal_cents: row.subtotal_cents,
                total_cents: row.total_cents,
                discount_bps: row.discount_bps,
            })
            .collect())
    }

    async fn sum_totals_since(&self, since: DateTime<Utc>) -> StoreResult<Money> {
        let cents: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(total_cents), 0) FROM sales WHERE created_at >= ?1")
                .bind(since)
                .fetch_one(&self.pool)
                .await
                .map_err(db)?;
        Ok(Money::from_cents(cents))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Duration;
    use mercato_checkout::{CheckoutError, SaleCoordinator};

    async fn database(atomic: bool) -> Database {
        Database::new(DbConfig::in_memory().atomic_commits(atomic))
            .await
            .unwrap()
    }

    fn draft(total_cents: i64, discount_bps: u32, created_at: DateTime<Utc>) -> SaleDraft {
        SaleDraft {
            id: Uuid::new_v4().to_string(),
            created_at,
            subtotal_cents: total_cents,
            total_cents,
            discount_bps,
            lines: vec![],
        }
    }

    // ---- atomic path ----------------------------------------------------

    #[tokio::test]
    async fn atomic_checkout_end_to_end() {
        let db = database(true).await;
        let store = db.store();
        let p1 = store.insert_product("Widget", 1000, 5).await.unwrap();

        let coord = SaleCoordinator::new(store);
        let sale = coord
            .commit_sale(&[CartLine::new(&p1.id, 2)], Some(10.0))
            .await
            .unwrap();

        assert_eq!(sale.subtotal_cents, 2000);
        assert_eq!(sale.total_cents, 1800);
        assert_eq!(sale.discount_bps, 1000);
        assert_eq!(sale.lines.len(), 1);
        assert_eq!(sale.lines[0].subtotal_cents, 2000);

        let product = coord.store().get_product(&p1.id).await.unwrap().unwrap();
        assert_eq!(product.stock, 3);

        // The persisted record round-trips with its lines.
        let listed = coord.sales_newest_first().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, sale.id);
        assert_eq!(listed[0].lines.len(), 1);
        assert_eq!(listed[0].lines[0].name_snapshot, "Widget");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_checkouts_never_oversell() {
        let db = database(true).await;
        let store = db.store();
        let product = store.insert_product("Scarce", 500, 3).await.unwrap();
        let coord = SaleCoordinator::new(store);

        let mut handles = Vec::new();
        for _ in 0..6 {
            let coord = coord.clone();
            let id = product.id.clone();
            handles.push(tokio::spawn(async move {
                coord.commit_sale(&[CartLine::new(id, 1)], None).await
            }));
        }

        let mut committed = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => committed += 1,
                Err(CheckoutError::Rejected(RuleViolation::InsufficientStock { .. })) => {
                    rejected += 1
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(committed, 3);
        assert_eq!(rejected, 3);

        let final_stock = coord
            .store()
            .get_product(&product.id)
            .await
            .unwrap()
            .unwrap()
            .stock;
        assert_eq!(final_stock, 0);
        assert_eq!(coord.sales_newest_first().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_product_rejected_before_any_mutation() {
        let db = database(true).await;
        let store = db.store();
        let known = store.insert_product("Known", 500, 10).await.unwrap();
        let coord = SaleCoordinator::new(store);

        let cart = [CartLine::new(&known.id, 2), CartLine::new("ghost", 1)];
        let err = coord.commit_sale(&cart, None).await.unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Rejected(RuleViolation::ProductNotFound { .. })
        ));

        let stock = coord
            .store()
            .get_product(&known.id)
            .await
            .unwrap()
            .unwrap()
            .stock;
        assert_eq!(stock, 10);
        assert!(coord.sales_newest_first().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_cart_lines_roll_back_atomically() {
        // p1 twice for 3 each against stock 4: the second guarded decrement
        // fails inside the transaction and everything unwinds.
        let db = database(true).await;
        let store = db.store();
        let p = store.insert_product("Coke", 500, 4).await.unwrap();
        let coord = SaleCoordinator::new(store);

        let cart = [CartLine::new(&p.id, 3), CartLine::new(&p.id, 3)];
        let err = coord.commit_sale(&cart, None).await.unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Rejected(RuleViolation::InsufficientStock { .. })
        ));

        let stock = coord
            .store()
            .get_product(&p.id)
            .await
            .unwrap()
            .unwrap()
            .stock;
        assert_eq!(stock, 4);
        assert!(coord.sales_newest_first().await.unwrap().is_empty());
    }

    // ---- fallback path --------------------------------------------------

    #[tokio::test]
    async fn fallback_commits_when_atomic_unavailable() {
        let db = database(false).await;
        let store = db.store();
        let p1 = store.insert_product("Widget", 1000, 5).await.unwrap();

        let coord = SaleCoordinator::new(store);
        let sale = coord
            .commit_sale(&[CartLine::new(&p1.id, 2)], Some(10.0))
            .await
            .unwrap();

        assert_eq!(sale.total_cents, 1800);
        let product = coord.store().get_product(&p1.id).await.unwrap().unwrap();
        assert_eq!(product.stock, 3);
    }

    #[tokio::test]
    async fn decrement_guard_rejects_and_never_goes_negative() {
        let db = database(true).await;
        let store = db.store();
        let p = store.insert_product("Coke", 299, 2).await.unwrap();

        match store.decrement_stock(&p.id, 5).await.unwrap() {
            StockDecrement::Insufficient { available } => assert_eq!(available, 2),
            other => panic!("expected Insufficient, got {other:?}"),
        }
        assert_eq!(
            store.decrement_stock("nope", 1).await.unwrap(),
            StockDecrement::Missing
        );

        match store.decrement_stock(&p.id, 2).await.unwrap() {
            StockDecrement::Applied { remaining } => assert_eq!(remaining, 0),
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    // ---- schema drift ---------------------------------------------------

    async fn drop_discount_column(pool: &SqlitePool) {
        sqlx::query("ALTER TABLE sales DROP COLUMN discount_bps")
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn probed_legacy_schema_inserts_without_discount() {
        let db = database(false).await;
        drop_discount_column(db.pool()).await;

        // Rebuilt store probes the altered schema.
        let store = SqliteInventoryStore::new(db.pool().clone(), false)
            .await
            .unwrap();
        let p1 = store.insert_product("Widget", 1000, 5).await.unwrap();

        let coord = SaleCoordinator::new(store);
        let sale = coord
            .commit_sale(&[CartLine::new(&p1.id, 2)], Some(10.0))
            .await
            .unwrap();

        // Caller still sees the discount and the discounted total...
        assert_eq!(sale.discount_bps, 1000);
        assert_eq!(sale.total_cents, 1800);
        // ...while the persisted row simply has no discount field.
        let listed = coord.sales_newest_first().await.unwrap();
        assert_eq!(listed[0].discount_bps, 0);
        assert_eq!(listed[0].total_cents, 1800);
    }

    #[tokio::test]
    async fn drift_after_probe_is_caught_by_text_match_retry() {
        let db = database(false).await;
        let store = db.store();
        // Schema changes AFTER the store probed it.
        drop_discount_column(db.pool()).await;
        store.force_discount_flag(true);

        let sale = store
            .insert_sale(&draft(1800, 1000, Utc::now()))
            .await
            .unwrap();
        assert_eq!(sale.discount_bps, 1000);

        // The capability was downgraded; the next insert skips the retry.
        let again = store
            .insert_sale(&draft(900, 500, Utc::now()))
            .await
            .unwrap();
        assert_eq!(again.discount_bps, 500);
        assert_eq!(store.sales_newest_first().await.unwrap().len(), 2);
    }

    // ---- reports --------------------------------------------------------

    #[tokio::test]
    async fn sum_totals_since_and_ordering() {
        let db = database(true).await;
        let store = db.store();
        let now = Utc::now();

        store.insert_sale(&draft(1000, 0, now)).await.unwrap();
        store
            .insert_sale(&draft(2000, 0, now - Duration::hours(1)))
            .await
            .unwrap();
        store
            .insert_sale(&draft(10_000, 0, now - Duration::days(3)))
            .await
            .unwrap();

        let total = store
            .sum_totals_since(now - Duration::days(1))
            .await
            .unwrap();
        assert_eq!(total.cents(), 3000);

        let listed = store.sales_newest_first().await.unwrap();
        let totals: Vec<i64> = listed.iter().map(|s| s.total_cents).collect();
        assert_eq!(totals, vec![1000, 2000, 10_000]);
    }
}
