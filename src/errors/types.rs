//! Error types for the Pushy API client
//!
//! Every failure a client call can produce is represented here as a single
//! variant, so callers can match on the exact condition instead of parsing
//! message strings. A call fails with exactly one of these; nothing is
//! retried or recovered internally.

use thiserror::Error;

/// Main client error type
///
/// Validation variants are raised synchronously before any network I/O.
/// The remaining variants are produced while normalizing the transport's
/// outcome, in a fixed precedence: transport error, then empty body, then
/// server-reported error, then unexpected status code.
#[derive(Error, Debug)]
pub enum Error {
    // Construction errors
    #[error("Please provide a valid, alphanumeric Secret API key")]
    InvalidApiKey,

    // Local validation errors
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        argument: &'static str,
    },

    #[error("Invalid argument '{argument}': expected {expected}")]
    InvalidArgumentType {
        argument: &'static str,
        expected: &'static str,
    },

    #[error("Invalid API endpoint: {url}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    // Transport and response errors
    #[error("HTTP transport error: {source}")]
    Transport {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("An empty body was received from the Pushy API")]
    EmptyResponseBody,

    #[error("{message}")]
    Remote {
        message: String,
    },

    #[error("An invalid response code was received from the Pushy API: {status}")]
    UnexpectedStatusCode {
        status: u16,
    },

    #[error("Failed to decode {context}")]
    ResponseDecode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new MissingArgument error
    pub fn missing_argument(argument: &'static str) -> Self {
        Self::MissingArgument { argument }
    }

    /// Create a new InvalidArgumentType error
    pub fn invalid_argument(argument: &'static str, expected: &'static str) -> Self {
        Self::InvalidArgumentType { argument, expected }
    }

    /// Create a new Remote error from the server's `error` field
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create a new ResponseDecode error with source
    pub fn response_decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::ResponseDecode { context, source }
    }

    /// Whether the failure was raised locally, before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey
                | Self::MissingArgument { .. }
                | Self::InvalidArgumentType { .. }
                | Self::InvalidEndpoint { .. }
        )
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "construction",
            Self::MissingArgument { .. } | Self::InvalidArgumentType { .. } => "validation",
            Self::InvalidEndpoint { .. } => "config",
            Self::Transport { .. } => "transport",
            Self::EmptyResponseBody
            | Self::Remote { .. }
            | Self::UnexpectedStatusCode { .. }
            | Self::ResponseDecode { .. } => "response",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            source: Box::new(err),
        }
    }
}
