//! Langfuse error types

use thiserror::Error;

/// Errors that can occur talking to the Langfuse API
#[derive(Debug, Error)]
pub enum LangfuseError {
    #[error("Missing required environment variables: {public_key_env} and {secret_key_env} must be set")]
    MissingCredentials {
        public_key_env: String,
        secret_key_env: String,
    },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LangfuseError {
    /// Whether the server refused our credentials
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, LangfuseError::Api { status: 401 | 403, .. })
    }

    /// Whether a prompt with this name already exists
    pub fn is_conflict(&self) -> bool {
        matches!(self, LangfuseError::Api { status: 409, .. })
    }
}
