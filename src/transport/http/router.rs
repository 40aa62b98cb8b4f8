use crate::transport::http::cors::{method_not_allowed, not_found, preflight_middleware};
use crate::transport::http::handlers::{bookings, currency, health, payments};
use crate::transport::http::types::{
    AppState, ErrorBody, FormatRequest, FormatResponse, HealthResponse, InitiatePaymentRequest,
    ParseRequest, ParseResponse, PaymentInitiatedResponse, QuoteRequest, QuoteResponse,
};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        bookings::quote_handler,
        payments::initiate_payment_handler,
        currency::format_handler,
        currency::parse_handler
    ),
    components(schemas(
        QuoteRequest,
        QuoteResponse,
        InitiatePaymentRequest,
        PaymentInitiatedResponse,
        FormatRequest,
        FormatResponse,
        ParseRequest,
        ParseResponse,
        HealthResponse,
        ErrorBody
    ))
)]
pub struct ApiDoc;

/// Routes, OpenAPI docs, request tracing and the `OPTIONS` preflight short-circuit.
///
/// Unknown paths and unsupported methods still answer through [`CorsResponse`].
///
/// [`CorsResponse`]: crate::transport::http::cors::CorsResponse
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/bookings/quote", post(bookings::quote_handler))
        .route("/functions/initiate-payment", post(payments::initiate_payment_handler))
        .route("/api/currency/format", post(currency::format_handler))
        .route("/api/currency/parse", post(currency::parse_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(preflight_middleware))
        .layer(TraceLayer::new_for_http())
}
