//! Recognized application errors carrying an explicit HTTP status code.
//!
//! [`HttpError`] is the single error type every helper in this crate speaks:
//! it pairs a status code with a human-readable message and renders itself
//! as a plain-text response. Anything that is *not* an [`HttpError`] is
//! treated as opaque by the error boundary and mapped to a bare 500.

use std::borrow::Cow;
use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Type alias for boxed errors that are Send + Sync.
///
/// This matches `tower::BoxError`, the error type that flows through
/// fallible middleware stacks into the error boundary.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// A specialized [`Result`] type for request-handling helpers.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = HttpError> = std::result::Result<T, E>;

/// An error with an explicit HTTP status code and client-visible message.
///
/// The message defaults to the status code's standard reason phrase
/// (`403` → `"Forbidden"`) and can be overridden with [`with_message`].
///
/// [`with_message`]: HttpError::with_message
#[derive(Debug, Clone, thiserror::Error)]
#[error("{status}: {message}")]
#[must_use = "errors do nothing unless returned or serialized"]
pub struct HttpError {
    status: StatusCode,
    message: Cow<'static, str>,
}

impl HttpError {
    /// Creates a new [`HttpError`] with the standard reason phrase as message.
    #[inline]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            message: Cow::Borrowed(status.canonical_reason().unwrap_or_default()),
        }
    }

    /// Replaces the client-visible message.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-visible message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<StatusCode> for HttpError {
    #[inline]
    fn from(status: StatusCode) -> Self {
        Self::new(status)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message.into_owned()).into_response()
    }
}
