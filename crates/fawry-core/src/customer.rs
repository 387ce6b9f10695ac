//! # Customer
//!
//! A named buyer with a prepaid balance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::validation::{validate_balance, validate_customer_name, ValidationResult};

/// A customer and their money.
///
/// The balance is only ever changed by [`Customer::pay`], and never goes
/// below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    balance: Money,
}

impl Customer {
    /// Creates a customer with a starting balance.
    ///
    /// ## Example
    /// ```rust
    /// use fawry_core::customer::Customer;
    /// use fawry_core::money::Money;
    ///
    /// let customer = Customer::new("Muhammed Saad", Money::from_units(1000)).unwrap();
    /// assert_eq!(customer.balance(), Money::from_units(1000));
    /// ```
    pub fn new(name: impl Into<String>, balance: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_customer_name(&name)?;
        validate_balance(balance)?;

        Ok(Customer {
            name: name.trim().to_string(),
            balance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Debits `amount` from the balance.
    ///
    /// Fails with `InsufficientBalance` and leaves the balance untouched
    /// when `amount` exceeds it.
    pub fn pay(&mut self, amount: Money) -> CheckoutResult<()> {
        if self.balance < amount {
            return Err(CheckoutError::InsufficientBalance {
                required: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        debug!(customer = %self.name, %amount, balance = %self.balance, "Payment taken");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_debits_balance() {
        let mut customer = Customer::new("Muhammed Saad", Money::from_units(1000)).unwrap();
        customer.pay(Money::from_units(380)).unwrap();
        assert_eq!(customer.balance(), Money::from_units(620));
    }

    #[test]
    fn test_pay_exact_balance() {
        let mut customer = Customer::new("mo_sh", Money::from_units(500)).unwrap();
        customer.pay(Money::from_units(500)).unwrap();
        assert!(customer.balance().is_zero());
    }

    #[test]
    fn test_pay_insufficient_leaves_balance() {
        let mut customer = Customer::new("mohamed shaban", Money::from_units(100)).unwrap();

        let err = customer.pay(Money::from_units(530)).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientBalance {
                required: Money::from_units(530),
                available: Money::from_units(100),
            }
        );
        assert_eq!(customer.balance(), Money::from_units(100));
    }

    #[test]
    fn test_new_validates() {
        assert!(Customer::new("", Money::from_units(1)).is_err());
        assert!(Customer::new("Hany Ahmed", Money::from_cents(-1)).is_err());
    }
}
