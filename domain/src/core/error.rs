//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid port specified in server host: {0}")]
    InvalidHostPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_host_port_display() {
        let error = DomainError::InvalidHostPort("localhost:99999".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid port specified in server host: localhost:99999"
        );
    }
}
