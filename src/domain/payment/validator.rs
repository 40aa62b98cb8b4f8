use crate::domain::money::{format_currency, Money};
use crate::error::{Result, ServiceError};
use rust_decimal::Decimal;

/// Smallest payable amount, in whole KES.
pub const MINIMUM_PAYABLE: Decimal = Decimal::ONE;

/// Rejects amounts below the minimum payable unit. There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentAmountValidator {
    minimum: Money,
}

impl Default for PaymentAmountValidator {
    fn default() -> Self {
        Self {
            minimum: MINIMUM_PAYABLE,
        }
    }
}

impl PaymentAmountValidator {
    pub fn new(minimum: Money) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> Money {
        self.minimum
    }

    pub fn is_valid(&self, amount: Money) -> bool {
        amount >= self.minimum
    }

    /// Same check as [`is_valid`](Self::is_valid), with a message suitable for
    /// showing next to the payment form.
    pub fn validate(&self, amount: Money) -> Result<()> {
        if self.is_valid(amount) {
            Ok(())
        } else {
            Err(ServiceError::InvalidAmount {
                message: format!("Amount must be at least {}", format_currency(self.minimum)),
            })
        }
    }
}
