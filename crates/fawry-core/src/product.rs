//! # Products and Inventory
//!
//! A single `Product` type carries optional capabilities instead of a type
//! per capability combination.
//!
//! ## Capability Matrix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  expires_in_days   shipping_weight   Example            │
//! │  ─────────────   ───────────────   ───────────────   ───────────────    │
//! │  plain           None              None              Scratch card       │
//! │  expirable       Some(days)        None              Fresh bread        │
//! │  shippable       None              Some(weight)      TV                 │
//! │  both            Some(days)        Some(weight)      Cheese, Biscuits   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Products live in an [`Inventory`]. Carts only hold [`ProductId`]s, so the
//! one place that can change stock is the code holding `&mut Inventory`,
//! which during a sale is `Checkout::process`.

use std::collections::HashMap;
use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::validation::{validate_price, validate_product_name, ValidationResult};

// =============================================================================
// Identifiers
// =============================================================================

/// Unique product identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Weight
// =============================================================================

/// Shipping weight in grams.
///
/// Integer grams for the same reason money is integer cents: manifest
/// totals are sums of many small values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    #[inline]
    pub const fn from_grams(grams: u64) -> Self {
        Weight(grams)
    }

    #[inline]
    pub const fn grams(&self) -> u64 {
        self.0
    }

    /// Weight of `qty` units. Saturates rather than wrapping.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Weight(self.0.saturating_mul(qty as u64))
    }

}

/// Renders kilograms without trailing zeros: `0.4kg`, `1.1kg`, `15kg`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac == 0 {
            return write!(f, "{}kg", whole);
        }
        let frac = format!("{:03}", frac);
        write!(f, "{}.{}kg", whole, frac.trim_end_matches('0'))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        Weight(iter.fold(0u64, |acc, w| acc.saturating_add(w.0)))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable item.
///
/// Fields are private: name, price and capabilities are fixed at
/// construction, and stock only moves through [`Product::reduce_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    /// Units on hand.
    quantity: u32,
    /// Days until expiry. `None` means the product never expires.
    expires_in_days: Option<i64>,
    /// Per-unit weight. `Some` means the product ships.
    shipping_weight: Option<Weight>,
}

impl Product {
    /// Creates a plain product (never expires, not shipped).
    ///
    /// ## Example
    /// ```rust
    /// use fawry_core::money::Money;
    /// use fawry_core::product::{Product, Weight};
    ///
    /// let cheese = Product::new("Cheese", Money::from_units(100), 10)
    ///     .unwrap()
    ///     .with_expiry(5)
    ///     .with_shipping_weight(Weight::from_grams(400));
    ///
    /// assert!(!cheese.is_expired());
    /// assert!(cheese.requires_shipping());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            id: ProductId::new(),
            name: name.trim().to_string(),
            price,
            quantity,
            expires_in_days: None,
            shipping_weight: None,
        })
    }

    /// Makes the product expirable, `days` from now.
    pub fn with_expiry(mut self, days: i64) -> Self {
        self.expires_in_days = Some(days);
        self
    }

    /// Makes the product shippable with the given per-unit weight.
    pub fn with_shipping_weight(mut self, weight: Weight) -> Self {
        self.shipping_weight = Some(weight);
        self
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units currently on hand.
    #[inline]
    pub fn stock(&self) -> u32 {
        self.quantity
    }

    /// True iff an expiry countdown is set and has reached zero or below.
    pub fn is_expired(&self) -> bool {
        matches!(self.expires_in_days, Some(days) if days <= 0)
    }

    #[inline]
    pub fn requires_shipping(&self) -> bool {
        self.shipping_weight.is_some()
    }

    /// Per-unit shipping weight, if the product ships.
    #[inline]
    pub fn weight(&self) -> Option<Weight> {
        self.shipping_weight
    }

    /// Whether `quantity` units can be taken from the shelf.
    #[inline]
    pub fn can_sell(&self, quantity: u32) -> bool {
        quantity <= self.quantity
    }

    /// Removes `n` units from stock.
    ///
    /// Callers check [`Product::can_sell`] first; the subtraction saturates
    /// so stock can never wrap below zero.
    pub fn reduce_stock(&mut self, n: u32) {
        self.quantity = self.quantity.saturating_sub(n);
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The set of products the store sells, keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    products: HashMap<ProductId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product and returns its id.
    pub fn insert(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.insert(id, product);
        id
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str, units: i64, qty: u32) -> Product {
        Product::new(name, Money::from_units(units), qty).unwrap()
    }

    #[test]
    fn test_capability_combinations() {
        let card = plain("Mobile scratch cards", 10, 50);
        assert!(!card.is_expired());
        assert!(!card.requires_shipping());
        assert_eq!(card.weight(), None);

        let tv = plain("TV", 500, 5).with_shipping_weight(Weight::from_grams(15_000));
        assert!(!tv.is_expired());
        assert!(tv.requires_shipping());

        let bread = plain("Bread", 20, 30).with_expiry(2);
        assert!(!bread.is_expired());
        assert!(!bread.requires_shipping());

        let cheese = plain("Cheese", 100, 10)
            .with_expiry(5)
            .with_shipping_weight(Weight::from_grams(400));
        assert!(!cheese.is_expired());
        assert_eq!(cheese.weight(), Some(Weight::from_grams(400)));
    }

    #[test]
    fn test_expiry_boundary() {
        assert!(plain("Cheese", 30, 5).with_expiry(0).is_expired());
        assert!(plain("Cheese", 30, 5).with_expiry(-3).is_expired());
        assert!(!plain("Cheese", 30, 5).with_expiry(1).is_expired());
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(Product::new("", Money::from_units(1), 1).is_err());
        assert!(Product::new("Cheese", Money::from_cents(-1), 1).is_err());
    }

    #[test]
    fn test_new_trims_name() {
        let p = plain("  Cheese ", 1, 1);
        assert_eq!(p.name(), "Cheese");
    }

    #[test]
    fn test_reduce_stock() {
        let mut p = plain("Biscuits", 150, 15);
        assert!(p.can_sell(15));
        assert!(!p.can_sell(16));

        p.reduce_stock(1);
        assert_eq!(p.stock(), 14);

        p.reduce_stock(100);
        assert_eq!(p.stock(), 0);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::from_grams(400).to_string(), "0.4kg");
        assert_eq!(Weight::from_grams(1100).to_string(), "1.1kg");
        assert_eq!(Weight::from_grams(15_000).to_string(), "15kg");
        assert_eq!(Weight::from_grams(1).to_string(), "0.001kg");
    }

    #[test]
    fn test_weight_sum() {
        let total: Weight = [
            Weight::from_grams(400).multiply_quantity(2),
            Weight::from_grams(700),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.grams(), 1500);
    }

    #[test]
    fn test_weight_saturates() {
        let heavy = Weight::from_grams(u64::MAX / 2 + 1);
        assert_eq!(heavy.multiply_quantity(2).grams(), u64::MAX);

        let total: Weight = [heavy, heavy].into_iter().sum();
        assert_eq!(total.grams(), u64::MAX);
    }

    #[test]
    fn test_inventory_insert_and_lookup() {
        let mut inventory = Inventory::new();
        assert!(inventory.is_empty());

        let id = inventory.insert(plain("TV", 500, 5));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(id).map(Product::name), Some("TV"));

        inventory.get_mut(id).unwrap().reduce_stock(2);
        assert_eq!(inventory.get(id).unwrap().stock(), 3);

        assert!(inventory.get(ProductId::new()).is_none());
    }
}
