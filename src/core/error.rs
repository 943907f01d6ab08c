use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request body could not be decoded
    #[error("Invalid request: {0}")]
    Decode(String),

    /// Gateway credentials or service settings are missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Live provider call failed (transport, auth, or upstream validation)
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Only decode failures are propagated to actix; the rest are
        // rendered into the endpoint's envelope by the handlers.
        let body = match self {
            AppError::Decode(_) => "Invalid request".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }
}
