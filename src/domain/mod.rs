pub mod booking;
pub mod money;
pub mod payment;

pub use booking::{checked_total, compute_total, BookingQuote, QuoteSummary};
pub use money::{CurrencyFormatter, FormatOptions, Money};
pub use payment::{PaymentAmountValidator, PaymentReference, PaymentReferenceGenerator};
