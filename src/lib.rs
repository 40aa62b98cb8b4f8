pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::PaymentService;
pub use domain::booking::{checked_total, compute_total};
pub use domain::money::{format_currency, parse_currency, CurrencyFormatter, FormatOptions, Money};
pub use domain::payment::{PaymentAmountValidator, PaymentReference, PaymentReferenceGenerator};
pub use error::{Result, ServiceError};
pub use infra::config::ServiceConfig;
