//! # Error Types
//!
//! Domain-specific error types for fawry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fawry-core errors (this file)                                         │
//! │  ├── CheckoutError    - Cart / checkout / payment failures             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout-cli errors (separate crate)                                  │
//! │  └── ConfigError      - Bad config file or environment override        │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → CLI log line                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every failure aborts the current operation; nothing is retried

use thiserror::Error;

use crate::money::Money;
use crate::product::ProductId;

// =============================================================================
// Checkout Error
// =============================================================================

/// Failures raised while filling a cart or running a checkout.
///
/// Each variant is terminal for the call that produced it. The caller
/// decides whether to move on to the next cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Checkout was invoked on a cart with no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// Requested quantity exceeds the product's current stock.
    ///
    /// ## When This Occurs
    /// - At add time: the shelf has fewer units than requested
    /// - At checkout time: stock dropped after the line was added
    ///
    /// ## User Workflow
    /// ```text
    /// add_line(Cheese, 20)
    ///      │
    ///      ▼
    /// Check stock: available=10
    ///      │
    ///      ▼
    /// OutOfStock { product: "Cheese", available: 10, requested: 20 }
    /// ```
    #[error("{product} is out of stock: available {available}, requested {requested}")]
    OutOfStock {
        product: String,
        available: u32,
        /// Units asked for, summed across every line of the same product.
        requested: u64,
    },

    /// Product's expiry countdown has reached zero.
    #[error("{product} is expired")]
    Expired { product: String },

    /// Customer balance does not cover the order total.
    #[error("Customer's balance is insufficient: required {required}, available {available}")]
    InsufficientBalance { required: Money, available: Money },

    /// A cart line points at a product the inventory no longer holds.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A line total, subtotal or order total does not fit in `Money`.
    #[error("Order amount is too large{}", .product.as_deref().map(|p| format!(" at {p}")).unwrap_or_default())]
    AmountOverflow { product: Option<String> },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Flat discriminant of [`CheckoutError`], for callers that only care
/// about which rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutErrorKind {
    EmptyCart,
    OutOfStock,
    Expired,
    InsufficientBalance,
    ProductNotFound,
    AmountOverflow,
    Validation,
}

impl CheckoutError {
    /// Returns the error kind without its context fields.
    pub fn kind(&self) -> CheckoutErrorKind {
        match self {
            CheckoutError::EmptyCart => CheckoutErrorKind::EmptyCart,
            CheckoutError::OutOfStock { .. } => CheckoutErrorKind::OutOfStock,
            CheckoutError::Expired { .. } => CheckoutErrorKind::Expired,
            CheckoutError::InsufficientBalance { .. } => CheckoutErrorKind::InsufficientBalance,
            CheckoutError::ProductNotFound(_) => CheckoutErrorKind::ProductNotFound,
            CheckoutError::AmountOverflow { .. } => CheckoutErrorKind::AmountOverflow,
            CheckoutError::Validation(_) => CheckoutErrorKind::Validation,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when constructing products and customers, and when a cart line
/// carries a nonsensical quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
