// API client errors

use booklearn_core::ValidationError;

/// Message used when a failed response carries no usable `message`
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// API client error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Server answered with a non-success status
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    /// Request could not be completed by the transport
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Successful response whose body does not match the expected schema
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request could not be built from the given input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Human-readable message; for `HttpStatus` this is exactly the backend message
    pub fn message(&self) -> String {
        match self {
            ApiError::HttpStatus { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status code, only for `HttpStatus`
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}
