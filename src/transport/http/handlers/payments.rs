use crate::transport::http::cors::CorsResponse;
use crate::transport::http::types::{
    json_422, AppState, ErrorBody, InitiatePaymentRequest, PaymentInitiatedResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

/// Validates the amount and issues a payment reference for the payment backend.
#[utoipa::path(
    post,
    path = "/functions/initiate-payment",
    request_body = InitiatePaymentRequest,
    responses(
        (status = 200, description = "Reference issued", body = PaymentInitiatedResponse),
        (status = 400, description = "Invalid reference prefix", body = ErrorBody),
        (status = 402, description = "Amount below the minimum payable", body = ErrorBody),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    )
)]
pub async fn initiate_payment_handler(
    State(state): State<AppState>,
    payload: Result<Json<InitiatePaymentRequest>, JsonRejection>,
) -> CorsResponse {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => {
            return json_422(
                e,
                "{ amount: number, prefix?: string, booking_id?: string, phone_number?: string }",
            )
        }
    };

    let outcome = state
        .payments
        .initiate_payment(request.amount, request.prefix.as_deref());
    match outcome {
        Ok(intent) => CorsResponse::success(&PaymentInitiatedResponse::new(intent, request)),
        Err(e) => e.into(),
    }
}
