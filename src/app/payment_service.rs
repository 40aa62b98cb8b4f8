use crate::domain::booking::{BookingQuote, QuoteSummary};
use crate::domain::money::{CurrencyFormatter, Money};
use crate::domain::payment::{PaymentAmountValidator, PaymentReference, PaymentReferenceGenerator};
use crate::error::{Result, ServiceError};
use crate::infra::config::{check_prefix, ServiceConfig};
use tracing::{info, warn};

/// A payment attempt that passed validation and received a reference.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub reference: PaymentReference,
    pub amount: Money,
    pub formatted_amount: String,
}

/// Stateless facade over the pricing and payment helpers used by the function edge.
#[derive(Debug, Clone, Default)]
pub struct PaymentService {
    formatter: CurrencyFormatter,
    generator: PaymentReferenceGenerator,
    validator: PaymentAmountValidator,
}

impl PaymentService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            formatter: CurrencyFormatter::new(),
            generator: PaymentReferenceGenerator::new(config.reference_prefix.clone()),
            validator: PaymentAmountValidator::new(config.minimum_amount),
        }
    }

    pub fn generator(&self) -> &PaymentReferenceGenerator {
        &self.generator
    }

    pub fn validator(&self) -> &PaymentAmountValidator {
        &self.validator
    }

    pub fn quote(
        &self,
        rate_per_hour: Money,
        duration_hours: u32,
    ) -> Result<(BookingQuote, QuoteSummary)> {
        let quote = BookingQuote::new(rate_per_hour, duration_hours)?;
        let summary = quote.summary(&self.formatter);
        Ok((quote, summary))
    }

    /// Validates the amount and hands out a fresh reference.
    ///
    /// `prefix` overrides the configured reference prefix for this call only.
    pub fn initiate_payment(&self, amount: Money, prefix: Option<&str>) -> Result<PaymentIntent> {
        if let Err(e) = self.validator.validate(amount) {
            warn!(%amount, "payment rejected: {}", e);
            return Err(e);
        }

        let reference = match prefix.map(str::trim) {
            Some(p) => {
                check_prefix(p).map_err(ServiceError::InvalidRequest)?;
                self.generator.generate_with_prefix(p)
            }
            None => self.generator.generate(),
        };

        info!(%reference, %amount, "payment initiated");

        Ok(PaymentIntent {
            reference,
            amount,
            formatted_amount: self.formatter.format(amount),
        })
    }

    pub fn format_amount(&self, amount: Money) -> String {
        self.formatter.format(amount)
    }

    /// Returns the permissive parse result together with whether the text
    /// actually contained a number.
    pub fn parse_amount(&self, text: &str) -> (Money, bool) {
        match self.formatter.try_parse(text) {
            Ok(amount) => (amount, true),
            Err(_) => (self.formatter.parse(text), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn service() -> PaymentService {
        PaymentService::new(&ServiceConfig::default())
    }

    #[test]
    fn test_quote() {
        let (quote, summary) = service().quote(dec!(500), 3).unwrap();
        assert_eq!(quote.total(), dec!(1500));
        assert_eq!(summary.duration, "3 hours");
        assert_eq!(summary.total, "KES 1,500.00");
    }

    #[test]
    fn test_quote_zero_hours() {
        assert!(matches!(
            service().quote(dec!(500), 0),
            Err(ServiceError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_initiate_payment() {
        let intent = service().initiate_payment(dec!(2500), None).unwrap();
        assert_eq!(intent.reference.prefix(), "cb");
        assert_eq!(intent.amount, dec!(2500));
        assert_eq!(intent.formatted_amount, "KES 2,500.00");
    }

    #[test]
    fn test_initiate_payment_with_prefix_override() {
        let intent = service().initiate_payment(dec!(1), Some("lease")).unwrap();
        assert_eq!(intent.reference.prefix(), "lease");

        assert!(matches!(
            service().initiate_payment(dec!(1), Some("bad prefix")),
            Err(ServiceError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_initiate_payment_below_minimum() {
        assert!(matches!(
            service().initiate_payment(dec!(0.5), None),
            Err(ServiceError::InvalidAmount { .. })
        ));

        let strict = PaymentService::new(&ServiceConfig {
            minimum_amount: dec!(100),
            ..ServiceConfig::default()
        });
        assert!(strict.initiate_payment(dec!(99), None).is_err());
    }

    #[test]
    fn test_parse_amount_reports_failure() {
        let svc = service();
        assert_eq!(svc.parse_amount("KES 1,234.56"), (dec!(1234.56), true));
        assert_eq!(svc.parse_amount("abc"), (Decimal::ZERO, false));
    }
}
