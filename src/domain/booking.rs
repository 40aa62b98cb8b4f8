//! Booking quotes: hourly rate times duration, shown before a reservation is confirmed.

use crate::domain::money::{CurrencyFormatter, Money};
use crate::error::{Result, ServiceError};
use rust_decimal::Decimal;

/// `rate_per_hour * duration_hours`. No tax, discount or rounding is applied;
/// callers pass `duration_hours >= 1`.
///
/// Panics if the product does not fit in a [`Decimal`]. Use [`checked_total`]
/// for untrusted rates.
pub fn compute_total(rate_per_hour: Money, duration_hours: u32) -> Money {
    rate_per_hour * Decimal::from(duration_hours)
}

/// Like [`compute_total`], but `None` when the product overflows.
pub fn checked_total(rate_per_hour: Money, duration_hours: u32) -> Option<Money> {
    rate_per_hour.checked_mul(Decimal::from(duration_hours))
}

/// "1 hour", "3 hours".
pub fn duration_label(duration_hours: u32) -> String {
    if duration_hours > 1 {
        format!("{} hours", duration_hours)
    } else {
        format!("{} hour", duration_hours)
    }
}

/// A priced booking. `total` always equals `rate_per_hour * duration_hours`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuote {
    rate_per_hour: Money,
    duration_hours: u32,
    total: Money,
}

/// Display strings for a quote, one per summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSummary {
    pub rate: String,
    pub duration: String,
    pub total: String,
}

impl BookingQuote {
    pub fn new(rate_per_hour: Money, duration_hours: u32) -> Result<Self> {
        if duration_hours < 1 {
            return Err(ServiceError::InvalidDuration {
                hours: duration_hours,
            });
        }
        if rate_per_hour.is_sign_negative() && !rate_per_hour.is_zero() {
            return Err(ServiceError::InvalidRequest(
                "rate_per_hour must not be negative".to_string(),
            ));
        }

        let total = checked_total(rate_per_hour, duration_hours).ok_or_else(|| {
            ServiceError::InvalidRequest(format!(
                "total for {} at {}/hour is too large",
                duration_label(duration_hours),
                rate_per_hour
            ))
        })?;

        Ok(Self {
            rate_per_hour,
            duration_hours,
            total,
        })
    }

    pub fn rate_per_hour(&self) -> Money {
        self.rate_per_hour
    }

    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn summary(&self, formatter: &CurrencyFormatter) -> QuoteSummary {
        QuoteSummary {
            rate: format!("{}/hour", formatter.format(self.rate_per_hour)),
            duration: duration_label(self.duration_hours),
            total: formatter.format(self.total),
        }
    }
}
