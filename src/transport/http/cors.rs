//! Response envelope for the function edge.
//!
//! Every response leaving the edge carries the same two CORS headers. JSON
//! responses add `Content-Type: application/json`; the preflight reply does not.

use crate::error::ServiceError;
use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value as JsonValue;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const PREFLIGHT_BODY: &str = "ok";

#[derive(Debug, Clone, PartialEq)]
pub enum CorsBody {
    Text(&'static str),
    Json(JsonValue),
}

#[derive(Debug, Clone)]
pub struct CorsResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: CorsBody,
}

impl CorsResponse {
    /// Reply to an `OPTIONS` preflight: `200 ok` with the CORS headers only.
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            headers: cors_headers(),
            body: CorsBody::Text(PREFLIGHT_BODY),
        }
    }

    /// `400` error with `{status: false, message, error}`.
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_with_status(message, StatusCode::BAD_REQUEST)
    }

    pub fn error_with_status(message: impl Into<String>, status: StatusCode) -> Self {
        let message = message.into();
        Self {
            status,
            headers: json_headers(),
            body: CorsBody::Json(serde_json::json!({
                "status": false,
                "message": message,
                "error": message,
            })),
        }
    }

    /// `200` with `data` serialized verbatim as the body.
    pub fn success<T: Serialize + ?Sized>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(body) => Self {
                status: StatusCode::OK,
                headers: json_headers(),
                body: CorsBody::Json(body),
            },
            Err(e) => {
                tracing::error!("failed to serialize response body: {}", e);
                ServiceError::from(e).into()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &CorsBody {
        &self.body
    }
}

impl From<ServiceError> for CorsResponse {
    fn from(err: ServiceError) -> Self {
        Self::error_with_status(err.to_string(), err.status_code())
    }
}

impl IntoResponse for CorsResponse {
    fn into_response(self) -> Response {
        let body = match self.body {
            CorsBody::Text(text) => Body::from(text),
            CorsBody::Json(value) => Body::from(value.to_string()),
        };
        let mut response = Response::new(body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Answers every `OPTIONS` request before it reaches routing.
pub async fn preflight_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return CorsResponse::preflight().into_response();
    }
    next.run(request).await
}

/// Router fallback for paths with no route.
pub async fn not_found() -> CorsResponse {
    CorsResponse::error_with_status("Not found", StatusCode::NOT_FOUND)
}

/// Router fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> CorsResponse {
    CorsResponse::error_with_status("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers
}

fn json_headers() -> HeaderMap {
    let mut headers = cors_headers();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preflight() {
        let r = CorsResponse::preflight();
        assert_eq!(r.status(), StatusCode::OK);
        assert_eq!(r.body(), &CorsBody::Text("ok"));
        assert_eq!(r.headers().len(), 2);
        assert_eq!(r.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            r.headers()[ACCESS_CONTROL_ALLOW_HEADERS],
            "authorization, x-client-info, apikey, content-type"
        );
        assert!(r.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_error_with_status() {
        let r = CorsResponse::error_with_status("Invalid amount", StatusCode::PAYMENT_REQUIRED);
        assert_eq!(r.status().as_u16(), 402);
        assert_eq!(
            r.body(),
            &CorsBody::Json(json!({
                "status": false,
                "message": "Invalid amount",
                "error": "Invalid amount"
            }))
        );
        assert_eq!(r.headers().len(), 3);
        assert_eq!(r.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_error_defaults_to_bad_request() {
        assert_eq!(CorsResponse::error("nope").status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_success_is_verbatim() {
        let data = json!({"reference": "cb_1_abcdefghi", "nested": [1, 2, 3]});
        let r = CorsResponse::success(&data);
        assert_eq!(r.status(), StatusCode::OK);
        assert_eq!(r.body(), &CorsBody::Json(data));
        assert_eq!(r.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_from_service_error() {
        let r: CorsResponse = ServiceError::InvalidDuration { hours: 0 }.into();
        assert_eq!(r.status(), StatusCode::BAD_REQUEST);
        match r.body() {
            CorsBody::Json(v) => {
                assert_eq!(v["status"], json!(false));
                assert_eq!(v["message"], v["error"]);
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[test]
    fn test_into_response_keeps_headers_exact() {
        let response = CorsResponse::preflight().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().len(), 2);

        let response = CorsResponse::error("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers().len(), 3);
    }
}
