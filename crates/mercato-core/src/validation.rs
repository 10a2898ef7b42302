//! # Validation Module
//!
//! Structural input validation for checkout requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: API layer (out of scope)                                  │
//! │  └── Deserialization / shape checks                                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - structural rules, no store access           │
//! │  └── cart non-empty, quantities positive, discount in [0, 100]      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Commit path - stock rules at the moment of decrement      │
//! │  └── stock is racy, so it is NEVER checked here                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock correctness is deliberately absent from this module: stock must be
//! re-checked at the instant of decrement by whichever commit path runs, not
//! earlier.

use crate::error::{CoreResult, ValidationError};
use crate::money::DiscountRate;
use crate::types::CartLine;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Validation
// =============================================================================

/// Validates the structural shape of a cart.
///
/// ## Rules
/// - At least one line, at most [`MAX_CART_LINES`]
/// - Every quantity in `1..=MAX_LINE_QUANTITY`
///
/// ## Example
/// ```rust
/// use mercato_core::types::CartLine;
/// use mercato_core::validation::validate_cart;
///
/// assert!(validate_cart(&[CartLine::new("p1", 2)]).is_ok());
/// assert!(validate_cart(&[]).is_err());
/// ```
pub fn validate_cart(cart: &[CartLine]) -> CoreResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    if cart.len() > MAX_CART_LINES {
        return Err(ValidationError::CartTooLarge {
            max: MAX_CART_LINES,
        });
    }

    for line in cart {
        if line.quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
            });
        }
        if line.quantity > MAX_LINE_QUANTITY {
            return Err(ValidationError::QuantityTooLarge {
                requested: line.quantity,
                max: MAX_LINE_QUANTITY,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Discount Validation
// =============================================================================

/// Validates a discount percentage and converts it to basis points.
///
/// ## Rules
/// - Must be a finite number in `[0, 100]`
/// - Fractional percentages are kept exact to 0.01% (one basis point)
///
/// ## Example
/// ```rust
/// use mercato_core::validation::validate_discount_percent;
///
/// assert_eq!(validate_discount_percent(10.0).unwrap().bps(), 1000);
/// assert!(validate_discount_percent(-5.0).is_err());
/// assert!(validate_discount_percent(150.0).is_err());
/// ```
pub fn validate_discount_percent(percent: f64) -> CoreResult<DiscountRate> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::DiscountOutOfRange { value: percent });
    }

    Ok(DiscountRate::from_bps((percent * 100.0).round() as u32))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cart() {
        let cart = vec![CartLine::new("p1", 1), CartLine::new("p2", 999)];
        assert!(validate_cart(&cart).is_ok());
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert!(matches!(
            validate_cart(&[]).unwrap_err(),
            ValidationError::EmptyCart
        ));
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let err = validate_cart(&[CartLine::new("p1", 0)]).unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveQuantity { .. }));

        let err = validate_cart(&[CartLine::new("p1", -3)]).unwrap_err();
        assert!(matches!(err, ValidationError::NonPositiveQuantity { .. }));
    }

    #[test]
    fn test_quantity_cap() {
        let err = validate_cart(&[CartLine::new("p1", MAX_LINE_QUANTITY + 1)]).unwrap_err();
        assert!(matches!(err, ValidationError::QuantityTooLarge { .. }));
    }

    #[test]
    fn test_cart_size_cap() {
        let cart: Vec<CartLine> = (0..=MAX_CART_LINES)
            .map(|i| CartLine::new(format!("p{i}"), 1))
            .collect();
        let err = validate_cart(&cart).unwrap_err();
        assert!(matches!(err, ValidationError::CartTooLarge { .. }));
    }

    #[test]
    fn test_discount_bounds() {
        assert_eq!(validate_discount_percent(0.0).unwrap().bps(), 0);
        assert_eq!(validate_discount_percent(100.0).unwrap().bps(), 10_000);
        assert_eq!(validate_discount_percent(10.5).unwrap().bps(), 1050);

        assert!(validate_discount_percent(-5.0).is_err());
        assert!(validate_discount_percent(150.0).is_err());
        assert!(validate_discount_percent(f64::NAN).is_err());
        assert!(validate_discount_percent(f64::INFINITY).is_err());
    }
}
