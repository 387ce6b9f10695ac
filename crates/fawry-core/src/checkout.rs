//! # Checkout
//!
//! Turns a cart into a paid order.
//!
//! ## Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout::process(inventory, customer, cart, shipper)                  │
//! │                                                                         │
//! │  ── quote (pure, no mutation) ──────────────────────────────────────    │
//! │  1. cart empty? ─────────────────────────────► EmptyCart                │
//! │  2. per line: product gone? ─────────────────► ProductNotFound          │
//! │               qty > stock? ──────────────────► OutOfStock               │
//! │               expired? ──────────────────────► Expired                  │
//! │  3. subtotal = Σ qty × price ────────────────► AmountOverflow           │
//! │  4. shipping = flat fee if any line ships, else 0                       │
//! │     total = subtotal + shipping ─────────────► AmountOverflow           │
//! │                                                                         │
//! │  ── commit ─────────────────────────────────────────────────────────    │
//! │  5. customer.pay(subtotal + shipping) ───────► InsufficientBalance      │
//! │  6. reduce stock on every line                                          │
//! │  7. shipper.ship(manifest) if anything ships                            │
//! │  8. return Receipt                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment is the only gate between validation and mutation. Any failure in
//! steps 1 to 5 leaves stock and balance exactly as they were.
//!
//! All money arithmetic in the quote is checked, so a price times quantity
//! that does not fit in `i64` cents is reported instead of wrapping.
//!
//! ## Shipping Fee
//! One flat fee per order, charged once if at least one line ships,
//! regardless of how many units or lines ship.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cart::Cart;
use crate::customer::Customer;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::product::{Inventory, ProductId, Weight};
use crate::receipt::Receipt;
use crate::shipping::{ShipmentManifest, ShippingService};
use crate::validation::{validate_shipping_fee, ValidationResult};
use crate::DEFAULT_SHIPPING_FEE_UNITS;

// =============================================================================
// Policy
// =============================================================================

/// Pricing knobs for a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutPolicy {
    /// Flat fee added once to any order with at least one shippable line.
    pub shipping_fee: Money,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        CheckoutPolicy {
            shipping_fee: Money::from_units(DEFAULT_SHIPPING_FEE_UNITS),
        }
    }
}

impl CheckoutPolicy {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_shipping_fee(self.shipping_fee)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A validated, priced cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub line_total: Money,
    /// Per-unit weight when the product ships.
    pub unit_weight: Option<Weight>,
}

impl QuoteLine {
    pub fn requires_shipping(&self) -> bool {
        self.unit_weight.is_some()
    }
}

/// The priced result of validating a cart against the inventory.
///
/// Nothing has been charged or taken off the shelf yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    lines: Vec<QuoteLine>,
    subtotal: Money,
    shipping: Money,
    total: Money,
}

impl Quote {
    pub fn lines(&self) -> &[QuoteLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Shipping surcharge; zero iff no line ships.
    pub fn shipping(&self) -> Money {
        self.shipping
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// The shipment notice for this order, or `None` when nothing ships.
    pub fn manifest(&self) -> Option<ShipmentManifest> {
        let mut manifest = ShipmentManifest::new();
        for line in &self.lines {
            if let Some(weight) = line.unit_weight {
                manifest.push(line.name.clone(), line.quantity, weight);
            }
        }
        (!manifest.is_empty()).then_some(manifest)
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// The checkout orchestrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkout {
    policy: CheckoutPolicy,
}

impl Checkout {
    pub fn new(policy: CheckoutPolicy) -> Self {
        Checkout { policy }
    }

    /// Validates `cart` against `inventory` and prices it.
    ///
    /// Pure: calling it twice on the same inventory and cart gives the same
    /// answer.
    ///
    /// Stock is checked per line and also per product across lines, so two
    /// lines of 6 against a shelf of 10 fail even though each line alone
    /// would fit.
    pub fn quote(&self, inventory: &Inventory, cart: &Cart) -> CheckoutResult<Quote> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut demand: HashMap<ProductId, u64> = HashMap::new();
        let mut lines = Vec::with_capacity(cart.len());
        let mut subtotal = Money::zero();

        for line in cart.lines() {
            let product = inventory
                .get(line.product_id)
                .ok_or(CheckoutError::ProductNotFound(line.product_id))?;

            let requested = demand.entry(line.product_id).or_insert(0);
            *requested += u64::from(line.quantity);

            if !product.can_sell(line.quantity) || *requested > u64::from(product.stock()) {
                return Err(CheckoutError::OutOfStock {
                    product: product.name().to_string(),
                    available: product.stock(),
                    requested: *requested,
                });
            }

            if product.is_expired() {
                return Err(CheckoutError::Expired {
                    product: product.name().to_string(),
                });
            }

            let overflow = || CheckoutError::AmountOverflow {
                product: Some(product.name().to_string()),
            };
            let line_total = product
                .price()
                .checked_multiply_quantity(line.quantity)
                .ok_or_else(overflow)?;
            subtotal = subtotal.checked_add(line_total).ok_or_else(overflow)?;

            lines.push(QuoteLine {
                product_id: product.id(),
                name: product.name().to_string(),
                quantity: line.quantity,
                unit_price: product.price(),
                line_total,
                unit_weight: product.weight(),
            });
        }

        let shipping = if lines.iter().any(QuoteLine::requires_shipping) {
            self.policy.shipping_fee
        } else {
            Money::zero()
        };
        let total = subtotal
            .checked_add(shipping)
            .ok_or(CheckoutError::AmountOverflow { product: None })?;

        debug!(lines = lines.len(), %subtotal, %shipping, "Cart quoted");
        Ok(Quote {
            lines,
            subtotal,
            shipping,
            total,
        })
    }

    /// Runs the full checkout: quote, charge, take stock, ship, receipt.
    pub fn process<S>(
        &self,
        inventory: &mut Inventory,
        customer: &mut Customer,
        cart: &Cart,
        shipper: &mut S,
    ) -> CheckoutResult<Receipt>
    where
        S: ShippingService + ?Sized,
    {
        let quote = self.quote(inventory, cart).map_err(|err| {
            warn!(customer = %customer.name(), error = %err, "Checkout rejected");
            err
        })?;

        customer.pay(quote.total()).map_err(|err| {
            warn!(customer = %customer.name(), error = %err, "Payment declined");
            err
        })?;

        for line in quote.lines() {
            if let Some(product) = inventory.get_mut(line.product_id) {
                product.reduce_stock(line.quantity);
            }
        }

        if let Some(manifest) = quote.manifest() {
            debug!(entries = manifest.entries().len(), weight = %manifest.total_weight(), "Shipping order");
            shipper.ship(&manifest);
        }

        let receipt = Receipt::from_quote(&quote, customer.name(), customer.balance());
        info!(
            receipt_id = %receipt.id,
            customer = %receipt.customer,
            total = %receipt.total,
            balance = %receipt.balance_remaining,
            "Checkout completed"
        );
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
