use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::ApiError(e) if e.is_decode() => ErrorCategory::Data,
            RelayError::ApiError(_) => ErrorCategory::Network,
            RelayError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            RelayError::IoError(_) => ErrorCategory::System,
            RelayError::ConfigValidationError { .. }
            | RelayError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the upstream URL",
            ErrorCategory::Upstream => "The upstream service is unhealthy; try again later",
            ErrorCategory::Data => "The upstream response format changed; check the upstream API",
            ErrorCategory::Configuration => "Fix the configuration value and restart",
            ErrorCategory::System => "Check file permissions and that the bind address is free",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::ApiError(e) if e.is_timeout() => {
                "The joke service did not answer in time".to_string()
            }
            RelayError::ApiError(e) if e.is_connect() => {
                "Could not connect to the joke service".to_string()
            }
            RelayError::UpstreamStatus { status } => {
                format!("The joke service answered with status {}", status)
            }
            RelayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
