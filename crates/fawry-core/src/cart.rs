//! # Cart
//!
//! An ordered list of (product, quantity) lines.
//!
//! ## Add-Time Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart.add_line(&product, qty)                                           │
//! │       │                                                                 │
//! │       ├── qty == 0 ───────────────► Validation                          │
//! │       ├── qty > product.stock() ──► OutOfStock                          │
//! │       ├── product.is_expired() ───► Expired                             │
//! │       └── push CartLine                                                 │
//! │                                                                         │
//! │  Stock is NOT reserved. Checkout re-checks stock and expiry because     │
//! │  the shelf can change between add and pay.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding the same product twice produces two lines; lines are never merged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CheckoutError, CheckoutResult};
use crate::product::{Product, ProductId};
use crate::validation::validate_quantity;

/// A line in the cart.
///
/// `name` is a snapshot taken when the line was added so error messages
/// and receipts still read well if the product is gone by checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn from_product(product: &Product, quantity: u32) -> Self {
        CartLine {
            product_id: product.id(),
            name: product.name().to_string(),
            quantity,
            added_at: Utc::now(),
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Every line has `quantity >= 1`, and at most the stock seen at add time
/// - Line order is insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line for `quantity` units of `product`.
    ///
    /// ## Errors
    /// - `Validation` if the quantity is zero
    /// - `OutOfStock` if `quantity` exceeds the product's current stock
    /// - `Expired` if the product has already expired
    pub fn add_line(&mut self, product: &Product, quantity: u32) -> CheckoutResult<()> {
        validate_quantity(quantity)?;

        if !product.can_sell(quantity) {
            return Err(CheckoutError::OutOfStock {
                product: product.name().to_string(),
                available: product.stock(),
                requested: u64::from(quantity),
            });
        }

        if product.is_expired() {
            return Err(CheckoutError::Expired {
                product: product.name().to_string(),
            });
        }

        debug!(product = %product.name(), quantity, "Adding cart line");
        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckoutErrorKind;
    use crate::money::Money;

    fn cheese(stock: u32, days: i64) -> Product {
        Product::new("Cheese", Money::from_units(100), stock)
            .unwrap()
            .with_expiry(days)
    }

    #[test]
    fn test_add_line() {
        let product = cheese(10, 5);
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        cart.add_line(&product, 2).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product_id, product.id());
        assert_eq!(cart.lines()[0].name, "Cheese");
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_line_does_not_reserve_stock() {
        let product = cheese(10, 5);
        let mut cart = Cart::new();
        cart.add_line(&product, 10).unwrap();
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn test_duplicate_products_are_not_merged() {
        let product = cheese(10, 5);
        let mut cart = Cart::new();
        cart.add_line(&product, 2).unwrap();
        cart.add_line(&product, 3).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_units(), 5);
    }

    #[test]
    fn test_out_of_stock_at_add_time() {
        let product = cheese(10, 5);
        let mut cart = Cart::new();

        let err = cart.add_line(&product, 20).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::OutOfStock {
                product: "Cheese".to_string(),
                available: 10,
                requested: 20,
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_expired_at_add_time() {
        let product = cheese(5, 0);
        let mut cart = Cart::new();

        let err = cart.add_line(&product, 1).unwrap_err();
        assert_eq!(err.kind(), CheckoutErrorKind::Expired);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_stock_checked_before_expiry() {
        let product = cheese(1, 0);
        let mut cart = Cart::new();

        let err = cart.add_line(&product, 2).unwrap_err();
        assert_eq!(err.kind(), CheckoutErrorKind::OutOfStock);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let product = cheese(10, 5);
        let mut cart = Cart::new();

        let err = cart.add_line(&product, 0).unwrap_err();
        assert_eq!(err.kind(), CheckoutErrorKind::Validation);
    }

    #[test]
    fn test_large_quantity_within_stock_accepted() {
        let bolts = Product::new("Bolts", Money::from_cents(1), 5_000).unwrap();
        let mut cart = Cart::new();

        cart.add_line(&bolts, 1_000).unwrap();
        assert_eq!(cart.lines()[0].quantity, 1_000);

        cart.add_line(&bolts, 4_000).unwrap();
        assert_eq!(cart.total_units(), 5_000);
    }

    #[test]
    fn test_many_lines_accepted() {
        let card = Product::new("Scratch card", Money::from_units(10), 1_000).unwrap();
        let mut cart = Cart::new();
        for _ in 0..150 {
            cart.add_line(&card, 1).unwrap();
        }
        assert_eq!(cart.len(), 150);
    }

    #[test]
    fn test_clear() {
        let product = cheese(10, 5);
        let mut cart = Cart::new();
        cart.add_line(&product, 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
