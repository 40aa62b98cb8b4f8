//! Payment-side helpers: references handed to the payment backend and the
//! minimum amount check applied before a payment is initiated.

pub mod reference;
pub mod validator;

pub use reference::{PaymentReference, PaymentReferenceGenerator};
pub use validator::PaymentAmountValidator;
