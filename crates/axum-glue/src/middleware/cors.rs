//! Permissive CORS header injection.

use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

/// Creates a layer that marks every response as accessible from any origin.
///
/// Unconditionally sets `Access-Control-Allow-Origin: *` on the outgoing
/// response and delegates to the next service. Intentionally permissive:
/// no per-origin allow-list, no credentials handling.
pub fn cors_any_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}
