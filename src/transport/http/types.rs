use crate::app::payment_service::{PaymentIntent, PaymentService};
use crate::domain::booking::{BookingQuote, QuoteSummary};
use crate::domain::money::Money;
use crate::transport::http::cors::CorsResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub payments: Arc<PaymentService>,
}

impl AppState {
    pub fn new(payments: PaymentService) -> Self {
        Self {
            payments: Arc::new(payments),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct QuoteRequest {
    /// Hourly rate in KES. Accepts a JSON number or a decimal string.
    #[schema(value_type = f64)]
    pub rate_per_hour: Money,
    /// Whole hours, at least 1.
    pub duration_hours: u32,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct QuoteResponse {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schema(value_type = f64)]
    pub rate_per_hour: Money,
    pub duration_hours: u32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schema(value_type = f64)]
    pub total: Money,
    /// e.g. `KES 500.00/hour`
    pub rate_label: String,
    /// e.g. `3 hours`
    pub duration_label: String,
    /// e.g. `KES 1,500.00`
    pub total_label: String,
}

impl QuoteResponse {
    pub fn new(quote: &BookingQuote, summary: QuoteSummary) -> Self {
        Self {
            rate_per_hour: quote.rate_per_hour(),
            duration_hours: quote.duration_hours(),
            total: quote.total(),
            rate_label: summary.rate,
            duration_label: summary.duration,
            total_label: summary.total,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct InitiatePaymentRequest {
    #[schema(value_type = f64)]
    pub amount: Money,
    /// Overrides the configured reference prefix for this payment.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Echoed back so the client can correlate the payment with its booking.
    #[serde(default)]
    pub booking_id: Option<String>,
    /// Payer's M-Pesa number, forwarded to the payment backend; echoed back.
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PaymentInitiatedResponse {
    pub status: bool,
    pub message: String,
    pub reference: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schema(value_type = f64)]
    pub amount: Money,
    pub formatted_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl PaymentInitiatedResponse {
    pub fn new(intent: PaymentIntent, request: InitiatePaymentRequest) -> Self {
        Self {
            status: true,
            message: "Payment initiated".to_string(),
            reference: intent.reference.to_string(),
            amount: intent.amount,
            formatted_amount: intent.formatted_amount,
            booking_id: request.booking_id,
            phone_number: request.phone_number,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct FormatRequest {
    #[schema(value_type = f64)]
    pub amount: Money,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct FormatResponse {
    pub formatted: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ParseResponse {
    /// Zero when `parsed` is false.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schema(value_type = f64)]
    pub amount: Money,
    /// Whether the text contained a number at all.
    pub parsed: bool,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every error reply; `message` and `error` carry the same text.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub status: bool,
    pub message: String,
    pub error: String,
}

pub fn json_422(err: JsonRejection, expected: &str) -> CorsResponse {
    CorsResponse::error_with_status(
        format!("Invalid JSON body: {} (expected: {})", err, expected),
        StatusCode::UNPROCESSABLE_ENTITY,
    )
}
