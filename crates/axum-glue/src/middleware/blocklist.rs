//! Path blocklisting by substring match.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{Request, StatusCode};
use futures::future::{BoxFuture, FutureExt, TryFutureExt};
use tower::{BoxError, Layer, Service};

use crate::error::HttpError;

/// An ordered list of blocked path substrings plus the rejection status.
///
/// Matching is plain substring matching, not path-segment or glob matching:
/// an entry `"admin"` also blocks `/administrator`. This breadth is
/// intentional and preserved exactly.
#[derive(Debug, Clone)]
#[must_use = "a blocklist does nothing unless layered onto a router"]
pub struct PathBlocklist {
    patterns: Arc<[String]>,
    status: StatusCode,
}

impl PathBlocklist {
    /// Creates a new [`PathBlocklist`] rejecting matches with `status`.
    pub fn new(
        patterns: impl IntoIterator<Item = impl Into<String>>,
        status: StatusCode,
    ) -> Self {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            status,
        }
    }

    /// Returns the status code used for rejections.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the first blocked substring contained in `path`, if any.
    #[must_use]
    pub fn matched(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .map(String::as_str)
            .find(|pattern| path.contains(pattern))
    }
}

/// [`Layer`] applying a [`PathBlocklist`] to the wrapped service.
///
/// The resulting service is fallible: rejections surface as a boxed
/// [`HttpError`] and must be translated by an error boundary such as
/// `axum::error_handling::HandleErrorLayer`.
/// [`RouterExt::with_path_blocklist`](super::RouterExt::with_path_blocklist)
/// bundles the two.
#[derive(Debug, Clone)]
pub struct BlockPathLayer {
    blocklist: PathBlocklist,
}

impl BlockPathLayer {
    /// Creates a new [`BlockPathLayer`].
    pub fn new(blocklist: PathBlocklist) -> Self {
        Self { blocklist }
    }
}

impl<S> Layer<S> for BlockPathLayer {
    type Service = BlockPath<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BlockPath {
            inner,
            blocklist: self.blocklist.clone(),
        }
    }
}

/// Middleware service produced by [`BlockPathLayer`].
#[derive(Debug, Clone)]
pub struct BlockPath<S> {
    inner: S,
    blocklist: PathBlocklist,
}

impl<S, B> Service<Request<B>> for BlockPath<S>
where
    S: Service<Request<B>>,
    S::Response: Send + 'static,
    S::Error: Into<BoxError> + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<S::Response, BoxError>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let path = request.uri().path();

        if let Some(pattern) = self.blocklist.matched(path) {
            tracing::debug!(
                target: "axum_glue::middleware::blocklist",
                path = %path,
                pattern = %pattern,
                "Request path blocked"
            );

            let error = HttpError::new(self.blocklist.status());
            return std::future::ready(Err(BoxError::from(error))).boxed();
        }

        self.inner.call(request).map_err(Into::into).boxed()
    }
}
