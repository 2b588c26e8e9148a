use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// A request field could not be coerced into a usable value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Processor name is not in the rate table
    #[error(
        "Unsupported processor '{processor}'. Supported processors: {}",
        .supported.join(", ")
    )]
    UnknownProcessor {
        processor: String,
        supported: Vec<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownProcessor { .. } => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn unknown_processor(processor: impl Into<String>, supported: Vec<String>) -> Self {
        AppError::UnknownProcessor {
            processor: processor.into(),
            supported,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
