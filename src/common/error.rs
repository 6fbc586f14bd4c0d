// Error handling types for the client

use thiserror::Error;

use super::validation::ValidationResult;

/// Crate-wide error taxonomy.
///
/// Session expiry is handled globally by the session manager (the session is
/// cleared before `SessionExpired` surfaces); everything else is handled by
/// the screen that initiated the request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid credentials: {0}")]
    AuthFailed(String),

    #[error("session expired, please log in again")]
    SessionExpired,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("server error (HTTP {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Maps a non-success HTTP status plus the backend's `detail` message
    /// onto the taxonomy. `unauthenticated` marks requests that never carried
    /// a bearer token (login, registration, refresh): a 401 there means the
    /// submitted credentials were bad, not that the session lapsed.
    pub fn from_status(status: u16, detail: String, unauthenticated: bool) -> Self {
        match status {
            401 if unauthenticated => ApiError::AuthFailed(detail),
            401 => ApiError::SessionExpired,
            403 => ApiError::Forbidden(detail),
            404 => ApiError::NotFound(detail),
            400 | 422 => ApiError::Validation(detail),
            _ => ApiError::Api { status, detail },
        }
    }

    /// Expected-absence check: optional data (no attendance record, no
    /// facility code configured) comes back as 404 and is not an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        let messages: Vec<String> = result
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        ApiError::Validation(messages.join(", "))
    }
}
