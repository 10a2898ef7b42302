//! # mercato-db: Database Layer for Mercato POS
//!
//! SQLite storage for products and sales, implementing the
//! [`InventoryStore`](mercato_checkout::InventoryStore) trait that the sale
//! coordinator consumes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Mercato POS Data Flow                          │
//! │                                                                     │
//! │  SaleCoordinator (mercato-checkout)                                 │
//! │       │ InventoryStore trait                                        │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   mercato-db (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │   ┌─────────────┐   ┌───────────────────┐   ┌─────────────┐  │  │
//! │  │   │  Database   │   │SqliteInventoryStore│  │ Migrations  │  │  │
//! │  │   │  (pool.rs)  │◄──│    (store.rs)      │  │ (embedded)  │  │  │
//! │  │   └─────────────┘   └───────────────────┘   └─────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mercato_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./mercato.db")).await?;
//! let coordinator = SaleCoordinator::new(db.store());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use store::SqliteInventoryStore;
