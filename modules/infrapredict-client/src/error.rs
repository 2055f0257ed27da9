use thiserror::Error;

pub type Result<T> = std::result::Result<T, InfraPredictError>;

#[derive(Debug, Error)]
pub enum InfraPredictError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error(
        "API error (status {status}): {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl InfraPredictError {
    /// The server's `error` string when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            InfraPredictError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for InfraPredictError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            InfraPredictError::Timeout
        } else {
            InfraPredictError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for InfraPredictError {
    fn from(err: serde_json::Error) -> Self {
        InfraPredictError::Parse(err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_beats_fallback() {
        let err = InfraPredictError::Api {
            status: 400,
            message: Some("Unsupported region".to_string()),
        };
        assert_eq!(err.user_message("Failed"), "Unsupported region");
    }

    #[test]
    fn other_errors_use_fallback() {
        let err = InfraPredictError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "API error (status 500): no error message");
        assert_eq!(err.user_message("Failed to fetch analysis."), "Failed to fetch analysis.");
        assert_eq!(
            InfraPredictError::Timeout.user_message("Try again"),
            "Try again"
        );
    }
}
