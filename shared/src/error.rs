use thiserror::Error;

use crate::constants::MSG_SERVER_ERROR;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a backend call. Client-side validation never produces one of
/// these, it is reported per field instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided text when there is one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        self.message_or(MSG_SERVER_ERROR)
    }

    /// Text for the notification layer, e.g. `Delete failed: Not authorized`.
    pub fn notice(&self, action: &str) -> String {
        format!("{action}: {}", self.user_message())
    }
}
