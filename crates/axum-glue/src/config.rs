//! Environment-driven listener configuration.

use std::env;

/// Environment variable consulted by [`env_port_or`].
pub const PORT_ENV_VAR: &str = "PORT";

/// Resolves the listen port from the `PORT` environment variable.
///
/// Returns the port prefixed with a colon, ready to be used as a bind
/// address suffix, plus a flag telling whether the environment override was
/// used. An unset or empty variable falls back to `default`. The value is
/// passed through verbatim, without numeric validation.
///
/// ```rust
/// use axum_glue::env_port_or;
///
/// let (addr, from_env) = env_port_or("8080");
/// assert!(addr.starts_with(':'));
/// # let _ = from_env;
/// ```
pub fn env_port_or(default: &str) -> (String, bool) {
    resolve_port(env::var(PORT_ENV_VAR).ok(), default)
}

fn resolve_port(env_value: Option<String>, default: &str) -> (String, bool) {
    match env_value {
        Some(port) if !port.is_empty() => (format!(":{port}"), true),
        _ => (format!(":{default}"), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        assert_eq!(resolve_port(None, "8080"), (":8080".to_owned(), false));
    }

    #[test]
    fn prefers_environment_value() {
        let value = Some("9090".to_owned());
        assert_eq!(resolve_port(value, "8080"), (":9090".to_owned(), true));
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let value = Some(String::new());
        assert_eq!(resolve_port(value, "8080"), (":8080".to_owned(), false));
    }

    #[test]
    fn value_is_not_validated() {
        let value = Some("not-a-number".to_owned());
        assert_eq!(
            resolve_port(value, "8080"),
            (":not-a-number".to_owned(), true)
        );
    }
}
