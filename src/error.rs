//! Error types for the swap client.

use std::fmt;

use reqwest::{Method, StatusCode};

/// The error type returned by every fallible operation in this crate.
///
/// Inspect [`Error::kind`] to distinguish local validation failures from
/// transport, status, or decode failures.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    status: Option<StatusCode>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Broad classification of an [`Error`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Invalid input rejected before any network activity.
    Validation,
    /// The underlying HTTP transport failed (DNS, connection, timeout).
    Transport,
    /// The API responded with a non-success status code.
    Status,
    /// The response body did not match the expected shape.
    Decode,
    /// The derived base URL is not a valid URL.
    Url,
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Validation,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    pub(crate) fn status(
        status: StatusCode,
        method: Method,
        path: String,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        Self {
            kind: Kind::Status,
            message: format!("{method} {path} responded with {status}: {message}"),
            status: Some(status),
            source: None,
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Decode,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Returns the [`Kind`] of this error.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the HTTP status code for [`Kind::Status`] errors.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self {
            kind: Kind::Transport,
            message: error.to_string(),
            status: error.status(),
            source: Some(Box::new(error)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Self {
            kind: Kind::Url,
            message: error.to_string(),
            status: None,
            source: Some(Box::new(error)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self {
            kind: Kind::Decode,
            message: error.to_string(),
            status: None,
            source: Some(Box::new(error)),
        }
    }
}
