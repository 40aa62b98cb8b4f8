use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{message}")]
    InvalidAmount { message: String },

    #[error("Booking duration must be at least 1 hour (got {hours})")]
    InvalidDuration { hours: u32 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Could not parse an amount from '{input}'")]
    UnparsableAmount { input: String },

    #[error("Amount in '{input}' is outside the supported range")]
    AmountOutOfRange { input: String },

    #[error("Configuration error for {key}: {reason}")]
    Config { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// HTTP status used when the error crosses the function edge.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidAmount { .. } => StatusCode::PAYMENT_REQUIRED,
            ServiceError::InvalidDuration { .. }
            | ServiceError::InvalidRequest(_)
            | ServiceError::UnparsableAmount { .. }
            | ServiceError::AmountOutOfRange { .. } => StatusCode::BAD_REQUEST,
            ServiceError::Config { .. } | ServiceError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ServiceError::InvalidAmount {
            message: "Amount must be at least KES 1.00".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(err.to_string(), "Amount must be at least KES 1.00");

        let err = ServiceError::InvalidDuration { hours: 0 };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ServiceError::AmountOutOfRange {
            input: "1e40".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ServiceError::Config {
            key: "BIND_ADDR".to_string(),
            reason: "not a socket address".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Configuration error for BIND_ADDR: not a socket address"
        );
    }
}
