use thiserror::Error;

pub type Result<T> = std::result::Result<T, EcoGuardError>;

#[derive(Debug, Error)]
pub enum EcoGuardError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl EcoGuardError {
    /// Message suitable for a view's error banner. HTTP errors surface the
    /// server's own `error` string (or the endpoint's fallback).
    pub fn user_message(&self) -> String {
        match self {
            EcoGuardError::Api { message, .. } => message.clone(),
            EcoGuardError::Timeout => "The request timed out. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for EcoGuardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EcoGuardError::Timeout
        } else {
            EcoGuardError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EcoGuardError {
    fn from(err: serde_json::Error) -> Self {
        EcoGuardError::Parse(err.to_string())
    }
}

/// Returned when a wire string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
