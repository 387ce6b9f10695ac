//! # Validation Module
//!
//! Input validation for products, customers and cart lines.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Product::new ───► validate_product_name, validate_price               │
//! │  Customer::new ──► validate_customer_name, validate_balance            │
//! │  Cart::add_line ─► validate_quantity                                   │
//! │                                                                         │
//! │  Stock and expiry are business rules, not input validation:            │
//! │  they live in cart.rs / checkout.rs and raise CheckoutError.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most `MAX_NAME_LENGTH` characters
///
/// ## Example
/// ```rust
/// use fawry_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Cheese").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name("product name", name)
}

/// Validates a customer name. Same rules as product names.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_name("customer name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound here; the stock check limits how much can be bought
///
/// ## User Workflow
/// ```text
/// cart.add_line(&cheese, qty)
///      │
///      ▼
/// validate_quantity(qty) ← THIS FUNCTION
///      │
///      ├── qty == 0?   → Error: "quantity must be positive"
///      └── OK → stock and expiry checks
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use fawry_core::money::Money;
/// use fawry_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_units(100)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a starting customer balance (non-negative).
pub fn validate_balance(balance: Money) -> ValidationResult<()> {
    if balance.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "balance".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a shipping fee (non-negative).
pub fn validate_shipping_fee(fee: Money) -> ValidationResult<()> {
    if fee.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "shipping fee".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Cheese").is_ok());
        assert!(validate_product_name("Mobile scratch cards").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_customer_name_reports_field() {
        let err = validate_customer_name("").unwrap_err();
        assert_eq!(err.to_string(), "customer name is required");
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(u32::MAX).is_ok());

        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_money_fields() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
        assert!(validate_balance(Money::from_units(1000)).is_ok());
        assert!(validate_balance(Money::from_cents(-1)).is_err());
        assert!(validate_shipping_fee(Money::from_units(30)).is_ok());
        assert!(validate_shipping_fee(Money::from_units(-30)).is_err());
    }
}
