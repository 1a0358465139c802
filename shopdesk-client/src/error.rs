//! Client error types

use thiserror::Error;

/// Message used when the backend gives nothing better to show
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be delivered (connection refused, reset, ...)
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP client could not be built or a request could not be encoded
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the call: non-2xx status or `success: false`
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 2xx body that could not be read or decoded
    ///
    /// `message` is the configured fallback shown to the user; `detail`
    /// is for logs only.
    #[error("Invalid response: {detail}")]
    InvalidResponse { message: String, detail: String },

    /// Payload failed client-side validation, nothing was sent
    #[error("{0}")]
    Validation(String),

    /// Object storage failure
    #[error("{0}")]
    Storage(String),

    /// Session store could not be read or written
    #[error("Session error: {0}")]
    Session(String),

    /// Operation not offered by this resource
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text for a transient notification
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidResponse { message, .. } => message.clone(),
            Self::Http(_) | Self::Serialization(_) => DEFAULT_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join(", "))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let err = ClientError::Api {
            status: 500,
            message: "Out of stock".into(),
        };
        assert_eq!(err.to_string(), "Out of stock");
        assert_eq!(err.user_message(), "Out of stock");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_detection() {
        let err = ClientError::Api {
            status: 404,
            message: DEFAULT_ERROR_MESSAGE.into(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_response_hides_details_from_user() {
        let err = ClientError::InvalidResponse {
            message: "Đã có lỗi xảy ra".into(),
            detail: "expected value at line 1".into(),
        };
        assert_eq!(err.user_message(), "Đã có lỗi xảy ra");
        assert_eq!(err.to_string(), "Invalid response: expected value at line 1");
    }
}
