use common::Endpoint;
use thiserror::Error;
use tracing::error;

/// Error types for calls against the employment API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The API answered with a non-success status. The body is not inspected.
    #[error("Failed to {}", .endpoint.operation())]
    Status { endpoint: Endpoint, status: u16 },

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(endpoint: Endpoint, status: u16) -> Self {
        let err = ApiError::Status { endpoint, status };
        error!(%endpoint, status, "API returned a non-success status");
        err
    }

    pub fn transport(endpoint: Endpoint, cause: impl ToString) -> Self {
        let err = ApiError::Transport(cause.to_string());
        error!(%endpoint, ?err, "API request failed");
        err
    }

    pub fn decode(endpoint: Endpoint, cause: impl ToString) -> Self {
        let err = ApiError::Decode(cause.to_string());
        error!(%endpoint, ?err, "API response could not be parsed");
        err
    }
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_generic_message() {
        let err = ApiError::status(Endpoint::Sectors, 500);
        assert_eq!(err.to_string(), "Failed to fetch sectors");

        let err = ApiError::status(Endpoint::PredictMw, 404);
        assert_eq!(err.to_string(), "Failed to predict jobs by MW");
    }

    #[test]
    fn test_transport_error_keeps_cause() {
        let err = ApiError::transport(Endpoint::Years, "connection refused");
        assert_eq!(err, ApiError::Transport("connection refused".to_string()));
    }
}
