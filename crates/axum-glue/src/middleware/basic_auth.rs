//! HTTP Basic Authentication backed by a caller-supplied credential table.
//!
//! The challenge cycle (401 + `WWW-Authenticate: Basic`) is carried by
//! tower-http's validate-request machinery; [`CredentialTable`] supplies
//! only the accept/reject decision.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::header::HeaderMap;
use axum::http::{HeaderValue, Request, Response, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use subtle::ConstantTimeEq;
use tower_http::validate_request::{ValidateRequest, ValidateRequestHeaderLayer};

/// Immutable username → password mapping, shared read-only across requests.
#[derive(Debug, Default, Clone)]
#[must_use = "a credential table does nothing unless layered onto a router"]
pub struct CredentialTable {
    users: HashMap<String, String>,
}

impl CredentialTable {
    /// Creates an empty [`CredentialTable`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a username/password pair to the table.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(username.into(), password.into());
        self
    }

    /// Checks the supplied credentials against the table.
    ///
    /// An unknown username is rejected without any password comparison. For
    /// a known username the passwords are compared with a constant-time byte
    /// comparison that does not short-circuit on the first differing byte.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some(expected) = self.users.get(username) else {
            return false;
        };

        expected.as_bytes().ct_eq(password.as_bytes()).into()
    }
}

impl<U, P> FromIterator<(U, P)> for CredentialTable
where
    U: Into<String>,
    P: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (U, P)>>(iter: T) -> Self {
        let users = iter
            .into_iter()
            .map(|(username, password)| (username.into(), password.into()))
            .collect();
        Self { users }
    }
}

impl<B> ValidateRequest<B> for CredentialTable {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        if let Some((username, password)) = decode_basic(request.headers())
            && self.verify(&username, &password)
        {
            return Ok(());
        }

        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::UNAUTHORIZED;
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        Err(response)
    }
}

/// Extracts the username/password pair from a `Basic` authorization header.
fn decode_basic(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(BASE64.decode(encoded).ok()?).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_owned(), password.to_owned()))
}

/// Creates a layer enforcing Basic Authentication against `table`.
///
/// Rejected requests receive a standard `401` challenge with a
/// `WWW-Authenticate: Basic` header and an empty body.
pub fn basic_auth_layer(table: CredentialTable) -> ValidateRequestHeaderLayer<CredentialTable> {
    ValidateRequestHeaderLayer::custom(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CredentialTable {
        CredentialTable::new().with_user("alice", "secret")
    }

    #[test]
    fn accepts_matching_credentials() {
        assert!(table().verify("alice", "secret"));
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(!table().verify("alice", "wrong!"));
        assert!(!table().verify("alice", "secreT"));
        assert!(!table().verify("alice", ""));
    }

    #[test]
    fn rejects_unknown_username() {
        assert!(!table().verify("bob", "secret"));
        assert!(!table().verify("", "secret"));
    }

    #[test]
    fn table_from_iterator() {
        let table: CredentialTable = [("alice", "secret"), ("bob", "hunter2")]
            .into_iter()
            .collect();
        assert!(table.verify("alice", "secret"));
        assert!(table.verify("bob", "hunter2"));
    }

    #[test]
    fn decodes_basic_authorization() {
        let mut headers = HeaderMap::new();
        // base64("alice:secret")
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic YWxpY2U6c2VjcmV0"),
        );

        let decoded = decode_basic(&headers);
        assert_eq!(decoded, Some(("alice".to_owned(), "secret".to_owned())));
    }

    #[test]
    fn rejects_malformed_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer x"));
        assert_eq!(decode_basic(&headers), None);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic not-base64!"),
        );
        assert_eq!(decode_basic(&headers), None);
    }
}
