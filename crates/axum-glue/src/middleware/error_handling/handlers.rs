use std::future::ready;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::future::{BoxFuture, FutureExt};
use serde_json::json;

use crate::error::HttpError;

/// Future type returned by the error responders.
pub type ResponseFut = BoxFuture<'static, Response>;

/// Selects how the error boundary renders recognized errors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFormat {
    /// The message as a plain-text body.
    #[default]
    Plain,
    /// A JSON body: `{"status": <message>, "code": <numeric code>}`.
    Json,
}

impl ErrorFormat {
    /// Returns the responder function for this format.
    pub(crate) fn handler(self) -> fn(tower::BoxError) -> ResponseFut {
        match self {
            Self::Plain => handle_error,
            Self::Json => handle_error_json,
        }
    }
}

/// Transforms any [`tower::BoxError`] into a plain-text [`Response`].
///
/// A recognized [`HttpError`] is surfaced verbatim: its status code with the
/// message as the body. Every other error is opaque to the client and maps
/// to a bare 500 with an empty body.
pub fn handle_error(err: tower::BoxError) -> ResponseFut {
    let response = match recognize(&err) {
        Some(error) => (error.status(), error.message().to_owned()).into_response(),
        None => internal_error(&err),
    };

    ready(response).boxed()
}

/// Transforms any [`tower::BoxError`] into a structured JSON [`Response`].
///
/// Same classification as [`handle_error`], but a recognized [`HttpError`]
/// is rendered as `{"status": <message>, "code": <numeric code>}`.
pub fn handle_error_json(err: tower::BoxError) -> ResponseFut {
    let response = match recognize(&err) {
        Some(error) => {
            let body = json!({
                "status": error.message(),
                "code": error.status().as_u16(),
            });
            (error.status(), Json(body)).into_response()
        }
        None => internal_error(&err),
    };

    ready(response).boxed()
}

/// Extracts the recognized application error, if any.
///
/// Timeouts elapsed under the error boundary surface as a recognized 408.
fn recognize(err: &tower::BoxError) -> Option<HttpError> {
    use tower::timeout::error::Elapsed;

    if let Some(error) = err.downcast_ref::<HttpError>() {
        Some(error.clone())
    } else if err.downcast_ref::<Elapsed>().is_some() {
        Some(HttpError::new(StatusCode::REQUEST_TIMEOUT))
    } else {
        None
    }
}

fn internal_error(err: &tower::BoxError) -> Response {
    tracing::error!(
        target: "axum_glue::middleware::error",
        error = %err,
        "Unrecognized error reached the boundary"
    );

    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
