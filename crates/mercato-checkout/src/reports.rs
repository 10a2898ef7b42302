//! # Sale Reports
//!
//! Read-only views over committed sales: the `GET /sales` and
//! `GET /sales/total-day` equivalents. No concurrency concerns beyond store
//! read consistency.

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::debug;

use crate::coordinator::SaleCoordinator;
use crate::error::CheckoutError;
use crate::store::InventoryStore;
use mercato_core::{Money, Sale};

impl<S: InventoryStore> SaleCoordinator<S> {
    /// All sales, most recent first.
    pub async fn sales_newest_first(&self) -> Result<Vec<Sale>, CheckoutError> {
        Ok(self.store().sales_newest_first().await?)
    }

    /// Sum of sale totals with `created_at >= since`.
    pub async fn total_since(&self, since: DateTime<Utc>) -> Result<Money, CheckoutError> {
        Ok(self.store().sum_totals_since(since).await?)
    }

    /// Sum of sale totals for the current local day.
    ///
    /// Day boundary = local midnight, converted to UTC for the store query.
    pub async fn total_for_today(&self) -> Result<Money, CheckoutError> {
        let since = start_of_local_day();
        debug!(%since, "Computing same-day sales total");
        self.total_since(since).await
    }
}

/// The UTC instant of the most recent local midnight.
fn start_of_local_day() -> DateTime<Utc> {
    let midnight = Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    match Local.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.with_timezone(&Utc)
        }
        // A DST gap swallowing midnight: fall back to the naive reading.
        chrono::LocalResult::None => Utc.from_utc_datetime(&midnight),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
