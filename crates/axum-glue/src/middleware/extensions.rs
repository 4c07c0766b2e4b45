//! Extension traits for `axum::Router` to easily apply middleware layers.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::extract::Request;
use axum::http::header;
use axum::middleware::{Next, from_fn};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::CompressionLevel;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;

use crate::middleware::basic_auth::{CredentialTable, basic_auth_layer};
use crate::middleware::blocklist::{BlockPathLayer, PathBlocklist};
use crate::middleware::cors::cors_any_layer;
use crate::middleware::error_handling::{ErrorFormat, catch_panic};

/// Extension trait for `axum::`[`Router`] for layering middleware.
///
/// Each method wraps a single cross-cutting concern; the methods are
/// independent and may be combined in any order.
pub trait RouterExt<S> {
    /// Layers the global error boundary, panic recovery and a request timeout.
    ///
    /// Errors escaping fallible layers below this one are translated by the
    /// responder selected with `format`: a recognized
    /// [`HttpError`](crate::HttpError) is surfaced with its status code and
    /// message, anything else maps to a bare 500. Panics are recovered and
    /// also map to a bare 500; requests exceeding `timeout` are terminated
    /// with a 408.
    fn with_error_boundary(self, format: ErrorFormat, timeout: Duration) -> Self;

    /// Layers permissive CORS.
    ///
    /// Sets `Access-Control-Allow-Origin: *` on every response, regardless
    /// of request method or path.
    fn with_permissive_cors(self) -> Self;

    /// Layers HTTP Basic Authentication against the given credential table.
    ///
    /// Rejected requests receive a standard `401` challenge with a
    /// `WWW-Authenticate: Basic` header.
    fn with_basic_auth(self, table: CredentialTable) -> Self;

    /// Layers a path blocklist.
    ///
    /// The first blocked substring found in the request path short-circuits
    /// the pipeline with the blocklist's status code; the body is rendered
    /// by the responder selected with `format` (for the plain format, the
    /// status code's standard reason phrase). This method bundles its own
    /// error boundary so the fallible blocklist service composes onto an
    /// infallible router.
    fn with_path_blocklist(self, blocklist: PathBlocklist, format: ErrorFormat) -> Self;

    /// Layers response compression gated by path suffix.
    ///
    /// Only requests whose path ends in one of `suffixes` are eligible for
    /// compression; for every other request the client's `Accept-Encoding`
    /// is withheld from the compressor, so the response passes through
    /// unencoded. Suffix matching is case-sensitive and exact; `level` is
    /// passed through to the compressor unvalidated.
    fn with_suffix_compression(
        self,
        level: u32,
        suffixes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self;
}

impl<S> RouterExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_error_boundary(self, format: ErrorFormat, timeout: Duration) -> Self {
        let middlewares = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(format.handler()))
            .layer(CatchPanicLayer::custom(catch_panic))
            .layer(TimeoutLayer::new(timeout));

        self.layer(middlewares)
    }

    fn with_permissive_cors(self) -> Self {
        self.layer(cors_any_layer())
    }

    fn with_basic_auth(self, table: CredentialTable) -> Self {
        self.layer(basic_auth_layer(table))
    }

    fn with_path_blocklist(self, blocklist: PathBlocklist, format: ErrorFormat) -> Self {
        let middlewares = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(format.handler()))
            .layer(BlockPathLayer::new(blocklist));

        self.layer(middlewares)
    }

    fn with_suffix_compression(
        self,
        level: u32,
        suffixes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let suffixes: Arc<[String]> = suffixes.into_iter().map(Into::into).collect();

        let gate = from_fn(move |mut request: Request, next: Next| {
            let suffixes = Arc::clone(&suffixes);
            async move {
                let eligible = {
                    let path = request.uri().path();
                    suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
                };

                if !eligible {
                    request.headers_mut().remove(header::ACCEPT_ENCODING);
                }

                next.run(request).await
            }
        });

        // The gate must see the request before the compressor does, so it is
        // layered last (outermost).
        self.layer(CompressionLayer::new().quality(CompressionLevel::Precise(level as i32)))
            .layer(gate)
    }
}
