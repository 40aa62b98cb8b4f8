use crate::transport::http::cors::CorsResponse;
use crate::transport::http::types::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler() -> CorsResponse {
    CorsResponse::success(&HealthResponse {
        status: "ok".to_string(),
    })
}
