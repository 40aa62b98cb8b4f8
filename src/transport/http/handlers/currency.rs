use crate::transport::http::cors::CorsResponse;
use crate::transport::http::types::{
    json_422, AppState, ErrorBody, FormatRequest, FormatResponse, ParseRequest, ParseResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/currency/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Amount formatted as KES", body = FormatResponse),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    )
)]
pub async fn format_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormatRequest>, JsonRejection>,
) -> CorsResponse {
    match payload {
        Ok(Json(request)) => CorsResponse::success(&FormatResponse {
            formatted: state.payments.format_amount(request.amount),
        }),
        Err(e) => json_422(e, "{ amount: number }"),
    }
}

/// Never fails on odd input: unparsable text yields `amount: 0, parsed: false`.
#[utoipa::path(
    post,
    path = "/api/currency/parse",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Parsed amount", body = ParseResponse),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    )
)]
pub async fn parse_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> CorsResponse {
    match payload {
        Ok(Json(request)) => {
            let (amount, parsed) = state.payments.parse_amount(&request.text);
            CorsResponse::success(&ParseResponse { amount, parsed })
        }
        Err(e) => json_422(e, "{ text: string }"),
    }
}
