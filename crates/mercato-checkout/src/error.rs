//! # Checkout Error Types
//!
//! The caller-facing error union of the coordinator.
//!
//! ## Mapping at the API layer
//! ```text
//! CheckoutError::Invalid   → 400  (malformed request, never reached store)
//! CheckoutError::Rejected  → 400  (business rule; authoritative, not retried)
//! CheckoutError::Storage   → 500  (I/O or schema failure; caller may retry)
//! ```

use thiserror::Error;

use crate::store::StoreError;
use mercato_core::{RuleViolation, ValidationError};

/// Everything `commit_sale` (and the reports) can fail with.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The request was structurally malformed. No store access happened.
    #[error("invalid request: {0}")]
    Invalid(#[from] ValidationError),

    /// A business rule rejected the sale. Messages name the offending
    /// product. Never auto-retried.
    #[error(transparent)]
    Rejected(#[from] RuleViolation),

    /// The storage layer failed. Retryable by the caller.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl CheckoutError {
    /// True for failures caused by the request itself (client errors).
    pub fn is_client_error(&self) -> bool {
        matches!(self, CheckoutError::Invalid(_) | CheckoutError::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let invalid = CheckoutError::Invalid(ValidationError::EmptyCart);
        assert!(invalid.is_client_error());

        let rejected = CheckoutError::Rejected(RuleViolation::ProductNotFound {
            product_id: "p9".to_string(),
        });
        assert!(rejected.is_client_error());

        let storage = CheckoutError::Storage(StoreError::QueryFailed("disk".to_string()));
        assert!(!storage.is_client_error());
    }

    #[test]
    fn test_rejection_message_names_product() {
        let err = CheckoutError::Rejected(RuleViolation::InsufficientStock {
            name: "Pepsi 500ml".to_string(),
            available: 1,
            requested: 4,
        });
        assert!(err.to_string().contains("Pepsi 500ml"));
    }
}
