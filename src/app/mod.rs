pub mod payment_service;

pub use payment_service::{PaymentIntent, PaymentService};
