//! # mercato-checkout: Sale Transaction Coordinator
//!
//! Converts a cart of (product, quantity) pairs plus an optional percentage
//! discount into a durable sale record and consistent inventory decrements,
//! guaranteeing no product is oversold under concurrent checkouts.
//!
//! ## Commit Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Commit State Machine                           │
//! │                                                                     │
//! │  commit_sale(cart, discount)                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Validating ── malformed ──► CheckoutError::Invalid                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  AttemptAtomic: store.atomic_sale(...)                              │
//! │       ├── Committed(sale) ──────────────► done                      │
//! │       ├── Rejected(violation) ──────────► CheckoutError::Rejected   │
//! │       │     (authoritative - NEVER falls back)                      │
//! │       └── Unavailable                                               │
//! │              │                                                      │
//! │              ▼                                                      │
//! │  AttemptFallback (sequential, degraded):                            │
//! │       a. read + validate every product   (no writes yet)            │
//! │       b. snapshot lines, price                                      │
//! │       c. conditional decrement per line  (zero rows = late reject)  │
//! │       d. insert sale (store absorbs discount-column schema drift)   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  committed | aborted                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The atomic path is preferred whenever the store offers it; the fallback
//! exists for deployments where the all-or-nothing procedure is missing and
//! carries a documented inconsistency window (a crash between decrement and
//! insert leaves stock reduced with no sale row).
//!
//! ## Modules
//!
//! - [`store`] - The `InventoryStore` trait and its typed outcomes
//! - [`coordinator`] - The commit state machine
//! - [`reports`] - Sale listing and the same-day total aggregate
//! - [`error`] - `CheckoutError`, the caller-facing error union

pub mod coordinator;
pub mod error;
pub mod reports;
pub mod store;

#[cfg(test)]
pub(crate) mod fake_store;

pub use coordinator::SaleCoordinator;
pub use error::CheckoutError;
pub use store::{AtomicOutcome, InventoryStore, StockDecrement, StoreError, StoreResult};
