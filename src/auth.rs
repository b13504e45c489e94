//! Admin Authentication Module
//!
//! Validates the static admin credential pair carried in an HTTP basic-auth
//! header. There is no session or token issuance; every admin-API request
//! re-authenticates from the raw header.

use axum::http::{header, HeaderMap};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::Config;
use crate::error::{Result, ShortenerError};

// == Header Check ==
/// Checks a raw `Authorization` header value against the configured
/// credentials.
///
/// Accepts only the `Basic` scheme. The base64 payload is decoded and split
/// on the first colon into username and password; both halves must match.
/// Any malformed header, wrong scheme, or mismatch is unauthorized.
pub fn is_authorized(header: Option<&str>, username: &str, password: &str) -> bool {
    let Some(header) = header else {
        return false;
    };
    let Some(payload) = header.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(payload.trim()) else {
        return false;
    };
    let Ok(credentials) = String::from_utf8(decoded) else {
        return false;
    };
    let Some((user, pass)) = credentials.split_once(':') else {
        return false;
    };

    user == username && pass == password
}

// == Handler Adapter ==
/// Authorizes an admin-API request from its headers.
///
/// Returns `Err(Unauthorized)` unless the request carries valid basic-auth
/// credentials for the configured admin account.
pub fn require_admin(headers: &HeaderMap, config: &Config) -> Result<()> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if is_authorized(header, &config.admin_username, &config.admin_password) {
        Ok(())
    } else {
        Err(ShortenerError::Unauthorized)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn basic(user: &str, pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass)))
    }

    #[test]
    fn test_valid_credentials() {
        let header = basic("admin", "secret");
        assert!(is_authorized(Some(&header), "admin", "secret"));
    }

    #[test]
    fn test_missing_header() {
        assert!(!is_authorized(None, "admin", "secret"));
    }

    #[test]
    fn test_wrong_password() {
        let header = basic("admin", "wrong");
        assert!(!is_authorized(Some(&header), "admin", "secret"));
    }

    #[test]
    fn test_wrong_username() {
        let header = basic("intruder", "secret");
        assert!(!is_authorized(Some(&header), "admin", "secret"));
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        assert!(!is_authorized(
            Some("Bearer abcdef"),
            "admin",
            "secret"
        ));
    }

    #[test]
    fn test_malformed_base64_rejected() {
        assert!(!is_authorized(
            Some("Basic !!!not-base64!!!"),
            "admin",
            "secret"
        ));
    }

    #[test]
    fn test_payload_without_colon_rejected() {
        let header = format!("Basic {}", STANDARD.encode("admin"));
        assert!(!is_authorized(Some(&header), "admin", "secret"));
    }

    #[test]
    fn test_password_containing_colon() {
        // Split happens on the first colon only
        let header = basic("admin", "se:cr:et");
        assert!(is_authorized(Some(&header), "admin", "se:cr:et"));
    }

    #[test]
    fn test_require_admin_accepts_valid_header() {
        let config = Config::default();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&basic(&config.admin_username, &config.admin_password)).unwrap(),
        );

        assert!(require_admin(&headers, &config).is_ok());
    }

    #[test]
    fn test_require_admin_rejects_missing_header() {
        let config = Config::default();
        let headers = HeaderMap::new();

        let result = require_admin(&headers, &config);
        assert!(matches!(result, Err(ShortenerError::Unauthorized)));
    }
}
