//! Request headers shared by every GitHub API call.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::console;

pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";
pub const CLIENT_ID: &str = concat!("gitch/", env!("CARGO_PKG_VERSION"));

/// Builds the header map, adding a bearer credential when `token` is given.
///
/// Reports on stdout whether a credential is in use. A token that cannot be
/// encoded as a header value is reported and skipped.
pub fn github_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_JSON));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_ID));

    match token.map(|t| HeaderValue::from_str(&format!("Bearer {t}"))) {
        Some(Ok(mut value)) => {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            console::dim("Using GitHub API token...");
        }
        Some(Err(e)) => {
            tracing::debug!(error = %e, "credential rejected as header value");
            console::warn("GitHub token contains invalid characters; ignoring it.");
        }
        None => {
            console::warn("No GitHub token found. Using public API (rate limited).");
            console::dim("Set GITHUB_TOKEN environment variable for better rate limits.");
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_headers_have_no_authorization() {
        let headers = github_headers(None);
        assert_eq!(headers[ACCEPT], ACCEPT_GITHUB_JSON);
        assert_eq!(headers[USER_AGENT], CLIENT_ID);
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn token_becomes_bearer_credential() {
        let headers = github_headers(Some("ghp_secret"));
        let auth = &headers[AUTHORIZATION];
        assert_eq!(auth, "Bearer ghp_secret");
        assert!(auth.is_sensitive());
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn unencodable_token_is_dropped() {
        let headers = github_headers(Some("bad\ntoken"));
        assert!(!headers.contains_key(AUTHORIZATION));
        assert_eq!(headers.len(), 2);
    }
}
