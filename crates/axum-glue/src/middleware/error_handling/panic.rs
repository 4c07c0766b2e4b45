use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

type Panic = Box<dyn Any + Send + 'static>;

/// Transforms any panic into a bare 500 [`Response`].
///
/// The panic payload is logged but never leaks to the client.
pub fn catch_panic(err: Panic) -> Response {
    if let Some(panic) = err.downcast_ref::<String>() {
        tracing::error!(
            target: "axum_glue::middleware::error",
            "handler panic: {}", panic,
        );
    } else if let Some(panic) = err.downcast_ref::<&str>() {
        tracing::error!(
            target: "axum_glue::middleware::error",
            "handler panic: {}", panic,
        );
    } else {
        tracing::error!(
            target: "axum_glue::middleware::error",
            "handler panic: unknown panic type",
        );
    }

    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
