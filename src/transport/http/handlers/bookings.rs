use crate::transport::http::cors::CorsResponse;
use crate::transport::http::types::{json_422, AppState, ErrorBody, QuoteRequest, QuoteResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/bookings/quote",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Quote computed", body = QuoteResponse),
        (status = 400, description = "Duration below one hour or negative rate", body = ErrorBody),
        (status = 422, description = "Malformed request body", body = ErrorBody)
    )
)]
pub async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> CorsResponse {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => return json_422(e, "{ rate_per_hour: number, duration_hours: integer >= 1 }"),
    };

    match state
        .payments
        .quote(request.rate_per_hour, request.duration_hours)
    {
        Ok((quote, summary)) => CorsResponse::success(&QuoteResponse::new(&quote, summary)),
        Err(e) => e.into(),
    }
}
