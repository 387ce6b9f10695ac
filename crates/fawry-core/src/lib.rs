//! # fawry-core: Pure Checkout Logic
//!
//! Products, cart, customer balance and the checkout routine that ties them
//! together. No I/O: printing, config files and logging subscribers belong
//! to the binary.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fawry Checkout Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-cli (binary)                        │   │
//! │  │    config.toml + env ──► scenarios ──► stdout receipts          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fawry-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   cart    │  │ checkout  │  │ shipping  │  │   │
//! │  │   │  Product  │  │   Cart    │  │  Quote    │  │ Manifest  │  │   │
//! │  │   │ Inventory │  │ CartLine  │  │  Receipt  │  │ Service   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product, capabilities, weight and inventory
//! - [`cart`] - Cart lines with add-time stock/expiry checks
//! - [`customer`] - Customer balance and payment
//! - [`checkout`] - Quote and the checkout sequence
//! - [`shipping`] - Shipment manifest and the shipping service trait
//! - [`receipt`] - Receipt produced by a successful checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use fawry_core::{Cart, Checkout, Customer, Inventory, Money, Product, ShipmentLog, Weight};
//!
//! let mut inventory = Inventory::new();
//! let cheese = Product::new("Cheese", Money::from_units(100), 10)
//!     .unwrap()
//!     .with_expiry(5)
//!     .with_shipping_weight(Weight::from_grams(400));
//! let cheese_id = inventory.insert(cheese);
//!
//! let mut cart = Cart::new();
//! cart.add_line(inventory.get(cheese_id).unwrap(), 2).unwrap();
//!
//! let mut customer = Customer::new("Muhammed Saad", Money::from_units(1000)).unwrap();
//! let mut shipper = ShipmentLog::new();
//! let receipt = Checkout::default()
//!     .process(&mut inventory, &mut customer, &cart, &mut shipper)
//!     .unwrap();
//!
//! assert_eq!(receipt.total, Money::from_units(230));
//! assert_eq!(customer.balance(), Money::from_units(770));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod receipt;
pub mod shipping;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use checkout::{Checkout, CheckoutPolicy, Quote, QuoteLine};
pub use customer::Customer;
pub use error::{CheckoutError, CheckoutErrorKind, CheckoutResult, ValidationError};
pub use money::Money;
pub use product::{Inventory, Product, ProductId, Weight};
pub use receipt::{Receipt, ReceiptLine};
pub use shipping::{ManifestEntry, ShipmentLog, ShipmentManifest, ShippingService};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee, in whole currency units, when no policy overrides it.
pub const DEFAULT_SHIPPING_FEE_UNITS: i64 = 30;

/// Maximum length of product and customer names, in characters.
pub const MAX_NAME_LENGTH: usize = 200;
