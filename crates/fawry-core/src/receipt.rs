//! # Receipt
//!
//! The record handed back from a successful checkout.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checkout::Quote;
use crate::money::Money;

/// One line of the receipt: quantity, name and line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
    pub line_total: Money,
}

/// A completed checkout.
///
/// Amounts are copied out of the [`Quote`] that was charged, so the receipt
/// stays valid whatever happens to the inventory afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub customer: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    /// Customer balance after the charge.
    pub balance_remaining: Money,
}

impl Receipt {
    pub(crate) fn from_quote(quote: &Quote, customer: &str, balance_remaining: Money) -> Self {
        Receipt {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            customer: customer.to_string(),
            lines: quote
                .lines()
                .iter()
                .map(|line| ReceiptLine {
                    quantity: line.quantity,
                    name: line.name.clone(),
                    line_total: line.line_total,
                })
                .collect(),
            subtotal: quote.subtotal(),
            shipping: quote.shipping(),
            total: quote.total(),
            balance_remaining,
        }
    }
}

/// ```text
/// ** Checkout receipt **
/// 2x Cheese $200.00
/// 1x Biscuits $150.00
/// ----------------------
/// Subtotal $350.00
/// Shipping $30.00
/// Amount $380.00
/// Balance $620.00
/// ```
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(f, "{}x {} {}", line.quantity, line.name, line.line_total)?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "Subtotal {}", self.subtotal)?;
        writeln!(f, "Shipping {}", self.shipping)?;
        writeln!(f, "Amount {}", self.total)?;
        write!(f, "Balance {}", self.balance_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let receipt = Receipt {
            id: Uuid::nil(),
            issued_at: Utc::now(),
            customer: "Muhammed Saad".to_string(),
            lines: vec![
                ReceiptLine {
                    quantity: 2,
                    name: "Cheese".to_string(),
                    line_total: Money::from_units(200),
                },
                ReceiptLine {
                    quantity: 1,
                    name: "Biscuits".to_string(),
                    line_total: Money::from_units(150),
                },
            ],
            subtotal: Money::from_units(350),
            shipping: Money::from_units(30),
            total: Money::from_units(380),
            balance_remaining: Money::from_units(620),
        };

        let expected = "** Checkout receipt **\n\
                        2x Cheese $200.00\n\
                        1x Biscuits $150.00\n\
                        ----------------------\n\
                        Subtotal $350.00\n\
                        Shipping $30.00\n\
                        Amount $380.00\n\
                        Balance $620.00";
        assert_eq!(receipt.to_string(), expected);
    }
}
