use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;

/// Errors produced while talking to the tournament API or preparing a draft.
///
/// Only `Transport` crosses the network boundary. Controllers never show the
/// carried detail to the user; it exists for the log.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SharedError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl SharedError {
    /// Builds a transport failure for a non-success HTTP status.
    pub fn status(url: &str, status: u16) -> Self {
        Self::Transport(format!("unexpected status {} for {}", status, url))
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_error_mentions_url_and_code() {
        let err = SharedError::status("/api/tournaments/7", 404);
        assert_eq!(
            err.to_string(),
            "Transport failure: unexpected status 404 for /api/tournaments/7"
        );
    }

    #[test]
    fn test_json_error_converts_to_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope");
        let err: SharedError = parse.unwrap_err().into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }
}
