//! # Error Types
//!
//! Domain-specific error types for mercato-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  mercato-core errors (this file)                                    │
//! │  ├── ValidationError  - Malformed input; never reaches the store    │
//! │  └── RuleViolation    - Domain rejection (stock, unknown product);  │
//! │                         authoritative, never auto-retried           │
//! │                                                                     │
//! │  mercato-checkout errors                                            │
//! │  ├── StoreError       - Storage/schema failure, retryable by caller │
//! │  └── CheckoutError    - The coordinator's caller-facing union       │
//! │                                                                     │
//! │  Flow: ValidationError | RuleViolation | StoreError → CheckoutError │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message naming the offender

use thiserror::Error;

// =============================================================================
// Rule Violation
// =============================================================================

/// Domain-level rejections of a checkout.
///
/// These are authoritative: once the store (atomic path) or the validation
/// pass of the fallback path raises one, the coordinator surfaces it as-is
/// and never re-runs the transaction against possibly-changed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The cart referenced a product id that does not exist.
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// Insufficient stock to complete the sale.
    ///
    /// ## When This Occurs
    /// - Pre-decrement validation sees `stock < quantity`
    /// - A conditional decrement affects zero rows (stock moved after
    ///   validation, discovered late)
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structural input validation errors.
///
/// These occur before any store access; a request that fails validation has
/// touched nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The cart is empty.
    #[error("cart must contain at least one line")]
    EmptyCart,

    /// Too many distinct lines in one cart.
    #[error("cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// A line quantity is zero or negative.
    #[error("quantity for product {product_id} must be positive, got {quantity}")]
    NonPositiveQuantity { product_id: String, quantity: i64 },

    /// A line quantity exceeds the per-line cap.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Discount percentage outside [0, 100] or not a finite number.
    #[error("discount percent must be a finite number between 0 and 100, got {value}")]
    DiscountOutOfRange { value: f64 },

    /// A unit price was negative (malformed pricing input).
    #[error("unit price must be non-negative, got {cents} cents")]
    NegativeUnitPrice { cents: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type CoreResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
