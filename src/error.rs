//! Error taxonomy for the poll cycle.
//!
//! Every failure mode of one cycle is a variant of [`PollError`], so the
//! loop boundary can handle the whole union exhaustively. None of these
//! terminate the process; only [`ConfigError`] at startup is fatal.

use thiserror::Error;

/// Everything that can go wrong inside a single poll cycle.
#[derive(Debug, Error)]
pub enum PollError {
    /// The network call itself could not complete.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server reported an application-level error in the payload
    /// (an `error` or `code` key), regardless of HTTP status.
    #[error("API reported an error: {message}")]
    Api { message: String },

    /// Non-success HTTP status with no structured error payload.
    #[error("unexpected HTTP status {0}")]
    UnexpectedCode(u16),

    /// The payload is not the shape we expect (missing or mistyped
    /// `homeworks`).
    #[error("malformed response: {0}")]
    Shape(String),

    /// A homework record carries a status outside the verdict table.
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),
}

/// Startup-time configuration failures. Fatal — the loop never starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingCredential(&'static str),

    #[error("TELEGRAM_CHAT_ID is not a valid numeric chat id: {0}")]
    InvalidChatId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_error_display_is_stable() {
        let err = PollError::Api {
            message: "not_authenticated".into(),
        };
        assert_eq!(err.to_string(), "API reported an error: not_authenticated");

        let err = PollError::UnexpectedCode(404);
        assert_eq!(err.to_string(), "unexpected HTTP status 404");

        let err = PollError::UnknownStatus("in_review".into());
        assert_eq!(err.to_string(), "unknown homework status: in_review");
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::MissingCredential("PRACTICUM_TOKEN");
        assert!(err.to_string().contains("PRACTICUM_TOKEN"));
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PollError>();
        assert_send_sync::<ConfigError>();
    }
}
