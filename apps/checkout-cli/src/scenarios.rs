//! # Demo Scenarios
//!
//! Each scenario builds its own shop and customer, so one failing
//! scenario never leaks state into the next.

use clap::ValueEnum;
use fawry_core::{
    Cart, Checkout, CheckoutResult, Customer, Inventory, Money, Product, ProductId, Receipt,
    ShippingService, Weight,
};

/// The store situations the demo walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// 2× Cheese + 1× Biscuits, enough balance
    NormalPurchase,
    /// Cheese whose expiry countdown is zero
    ExpiredProduct,
    /// A TV for a customer holding 100
    InsufficientBalance,
    /// Checkout with nothing in the cart
    EmptyCart,
    /// 20 Cheese against a stock of 10
    OutOfStock,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::NormalPurchase,
        Scenario::ExpiredProduct,
        Scenario::InsufficientBalance,
        Scenario::EmptyCart,
        Scenario::OutOfStock,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Scenario::NormalPurchase => "Normal purchase",
            Scenario::ExpiredProduct => "Test expired product",
            Scenario::InsufficientBalance => "Test insufficient balance",
            Scenario::EmptyCart => "Test empty cart",
            Scenario::OutOfStock => "Test out of stock",
        }
    }

    /// Builds the fixtures and runs one checkout.
    pub fn run(
        &self,
        checkout: &Checkout,
        shipper: &mut dyn ShippingService,
    ) -> CheckoutResult<Receipt> {
        let mut shop = Shop::stocked()?;
        let mut cart = Cart::new();

        let mut customer = match self {
            Scenario::NormalPurchase => {
                cart.add_line(shop.product(shop.cheese)?, 2)?;
                cart.add_line(shop.product(shop.biscuits)?, 1)?;
                Customer::new("Muhammed Saad", Money::from_units(1000))?
            }
            Scenario::ExpiredProduct => {
                cart.add_line(shop.product(shop.expired_cheese)?, 1)?;
                Customer::new("Hany Ahmed", Money::from_units(500))?
            }
            Scenario::InsufficientBalance => {
                cart.add_line(shop.product(shop.tv)?, 1)?;
                Customer::new("mohamed shaban", Money::from_units(100))?
            }
            Scenario::EmptyCart => Customer::new("mo_sh", Money::from_units(500))?,
            Scenario::OutOfStock => {
                cart.add_line(shop.product(shop.cheese)?, 20)?;
                Customer::new("not_mo_sh", Money::from_units(1000))?
            }
        };

        checkout.process(&mut shop.inventory, &mut customer, &cart, shipper)
    }
}

/// The demo shelf.
struct Shop {
    inventory: Inventory,
    cheese: ProductId,
    biscuits: ProductId,
    tv: ProductId,
    expired_cheese: ProductId,
}

impl Shop {
    fn stocked() -> CheckoutResult<Self> {
        let mut inventory = Inventory::new();

        let cheese = inventory.insert(
            Product::new("Cheese", Money::from_units(100), 10)?
                .with_expiry(5)
                .with_shipping_weight(Weight::from_grams(400)),
        );
        let biscuits = inventory.insert(
            Product::new("Biscuits", Money::from_units(150), 15)?
                .with_expiry(10)
                .with_shipping_weight(Weight::from_grams(700)),
        );
        let tv = inventory.insert(
            Product::new("TV", Money::from_units(500), 5)?
                .with_shipping_weight(Weight::from_grams(15_000)),
        );
        inventory.insert(Product::new("Mobile scratch cards", Money::from_units(10), 50)?);
        let expired_cheese = inventory.insert(
            Product::new("Cheese", Money::from_units(30), 5)?
                .with_expiry(0)
                .with_shipping_weight(Weight::from_grams(300)),
        );

        Ok(Shop {
            inventory,
            cheese,
            biscuits,
            tv,
            expired_cheese,
        })
    }

    fn product(&self, id: ProductId) -> CheckoutResult<&Product> {
        self.inventory
            .get(id)
            .ok_or(fawry_core::CheckoutError::ProductNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fawry_core::{CheckoutErrorKind, ShipmentLog};

    fn run(scenario: Scenario) -> (CheckoutResult<Receipt>, ShipmentLog) {
        let mut log = ShipmentLog::new();
        let result = scenario.run(&Checkout::default(), &mut log);
        (result, log)
    }

    #[test]
    fn test_normal_purchase() {
        let (result, log) = run(Scenario::NormalPurchase);
        let receipt = result.unwrap();
        assert_eq!(receipt.total, Money::from_units(380));
        assert_eq!(receipt.balance_remaining, Money::from_units(620));
        assert_eq!(log.shipped().len(), 1);
    }

    #[test]
    fn test_failure_scenarios() {
        let expected = [
            (Scenario::ExpiredProduct, CheckoutErrorKind::Expired),
            (Scenario::InsufficientBalance, CheckoutErrorKind::InsufficientBalance),
            (Scenario::EmptyCart, CheckoutErrorKind::EmptyCart),
            (Scenario::OutOfStock, CheckoutErrorKind::OutOfStock),
        ];

        for (scenario, kind) in expected {
            let (result, log) = run(scenario);
            assert_eq!(result.unwrap_err().kind(), kind, "{:?}", scenario);
            assert!(log.shipped().is_empty());
        }
    }

    #[test]
    fn test_all_lists_every_scenario() {
        assert_eq!(Scenario::ALL.len(), Scenario::value_variants().len());
    }
}
