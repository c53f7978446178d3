//! Error types for the Ollama adapter

use quickask_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama-compatible server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Server error: {0}")]
    Server(String),
}

impl From<OllamaError> for GatewayError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Http(err) if err.is_connect() || err.is_timeout() => {
                GatewayError::ConnectionError(err.to_string())
            }
            OllamaError::Http(err) if err.is_decode() => {
                GatewayError::InvalidResponse(err.to_string())
            }
            OllamaError::Http(err) => GatewayError::RequestFailed(err.to_string()),
            OllamaError::SerializationError(err) => GatewayError::InvalidResponse(err.to_string()),
            OllamaError::Status {
                status: 404,
                message,
            } => GatewayError::ModelNotAvailable(message),
            e @ OllamaError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            OllamaError::Server(message) => GatewayError::RequestFailed(message),
        }
    }
}
