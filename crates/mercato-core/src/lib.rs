//! # mercato-core: Pure Business Logic for Mercato POS
//!
//! This crate is the **heart** of Mercato POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Mercato POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 HTTP / API layer (out of scope)               │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │             mercato-checkout (Sale Coordinator)               │  │
//! │  │    validate → price → atomic commit → fallback commit         │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ mercato-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐      │  │
//! │  │   │  types  │  │  money  │  │ pricing │  │ validation │      │  │
//! │  │   │ Product │  │  Money  │  │ Totals  │  │   rules    │      │  │
//! │  │   │  Sale   │  │Discount │  │         │  │            │      │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘      │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               mercato-db (SQLite store, sqlx)                 │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Sale, ...)
//! - [`money`] - Money and DiscountRate with integer arithmetic (no floats!)
//! - [`pricing`] - The pricing engine (line subtotals, discounted total)
//! - [`error`] - Domain error types
//! - [`validation`] - Structural input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64); discount rates
//!    are basis points (u32). Rounding happens exactly once, at discount
//!    application.
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreResult, RuleViolation, ValidationError};
pub use money::{DiscountRate, Money};
pub use pricing::{compute_totals, PricedLine, Totals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps fallback commits (one round trip per
/// line) bounded.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in a cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
