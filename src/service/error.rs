//! Error types for summarization requests.

use thiserror::Error;

/// Shown when summarize is triggered with blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text before summarizing.";

/// Shown for every transport, status or schema failure.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Error connecting to backend.";

/// User-visible classification of a failed summarize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    TransportFailure,
}

/// Errors that can occur while summarizing.
///
/// Variants keep diagnostic detail for logging; the UI only ever sees
/// [`SummarizeError::user_message`].
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Input was empty after trimming
    #[error("Input text is empty")]
    EmptyInput,

    /// Connection, timeout or body read failure
    #[error("Request to summarization service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-2xx status
    #[error("Summarization service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not `{"summary": string}`
    #[error("Malformed response from summarization service: {0}")]
    MalformedResponse(String),

    /// No worker left to carry the request
    #[error("Summarization service unavailable: {0}")]
    Unavailable(String),
}

impl SummarizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummarizeError::EmptyInput => ErrorKind::EmptyInput,
            SummarizeError::Transport(_)
            | SummarizeError::Status { .. }
            | SummarizeError::MalformedResponse(_)
            | SummarizeError::Unavailable(_) => ErrorKind::TransportFailure,
        }
    }

    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::EmptyInput => EMPTY_INPUT_MESSAGE,
            ErrorKind::TransportFailure => TRANSPORT_FAILURE_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_collapse_to_two_messages() {
        assert_eq!(SummarizeError::EmptyInput.user_message(), EMPTY_INPUT_MESSAGE);
        assert_eq!(
            SummarizeError::Status {
                status: 503,
                body: "down".into()
            }
            .user_message(),
            TRANSPORT_FAILURE_MESSAGE
        );
        assert_eq!(
            SummarizeError::MalformedResponse("missing field `summary`".into()).kind(),
            ErrorKind::TransportFailure
        );
    }

    #[test]
    fn display_keeps_diagnostic_detail() {
        let err = SummarizeError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "Summarization service returned 500: boom");
    }
}
