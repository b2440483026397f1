//! Session State
//!
//! Authenticated session state: the JSON-RPC sequence number and the
//! current authentication scheme. A session starts anonymous, holds
//! cookies after login, and switches to a bearer API token once one has
//! been downloaded.

use secrecy::{ExposeSecret, SecretString};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Authentication scheme currently attached to outgoing requests.
#[derive(Clone)]
pub enum AuthScheme {
    /// No authentication yet.
    Anonymous,
    /// Session cookies captured from login, in arrival order.
    Cookies(Vec<(String, String)>),
    /// Bearer API token; cookies have been dropped.
    ApiToken(SecretString),
}

impl std::fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Cookies(cookies) => f
                .debug_tuple("Cookies")
                .field(&cookies.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
                .finish(),
            Self::ApiToken(_) => f.debug_tuple("ApiToken").field(&"[REDACTED]").finish(),
        }
    }
}

/// Mutable per-session state shared by all calls.
pub struct Session {
    seqno: AtomicU64,
    auth: Mutex<AuthScheme>,
}

impl Session {
    /// Create a fresh, unauthenticated session.
    pub fn new() -> Self {
        Self {
            seqno: AtomicU64::new(0),
            auth: Mutex::new(AuthScheme::Anonymous),
        }
    }

    /// Next JSON-RPC request id. Ids start at 1 and increase by one per call.
    pub fn next_seqno(&self) -> u64 {
        self.seqno.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record cookies from login `Set-Cookie` headers, replacing any
    /// previously stored ones.
    pub fn store_cookies<'a>(&self, set_cookie_values: impl IntoIterator<Item = &'a str>) {
        let cookies: Vec<(String, String)> = set_cookie_values
            .into_iter()
            .filter_map(parse_set_cookie)
            .collect();
        *self.auth.lock().expect("session auth lock") = AuthScheme::Cookies(cookies);
    }

    /// Switch to bearer-token authentication, discarding all cookies.
    pub fn promote_to_token(&self, token: SecretString) {
        *self.auth.lock().expect("session auth lock") = AuthScheme::ApiToken(token);
    }

    /// Whether any session cookies are currently held.
    pub fn has_cookies(&self) -> bool {
        matches!(
            &*self.auth.lock().expect("session auth lock"),
            AuthScheme::Cookies(c) if !c.is_empty()
        )
    }

    /// Whether the session has switched to bearer-token auth.
    pub fn is_token_auth(&self) -> bool {
        matches!(
            &*self.auth.lock().expect("session auth lock"),
            AuthScheme::ApiToken(_)
        )
    }

    /// Headers to attach to an outgoing request for the current scheme.
    pub fn auth_headers(&self) -> Vec<(String, String)> {
        match &*self.auth.lock().expect("session auth lock") {
            AuthScheme::Anonymous => Vec::new(),
            AuthScheme::Cookies(cookies) if cookies.is_empty() => Vec::new(),
            AuthScheme::Cookies(cookies) => {
                let value = cookies
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join("; ");
                vec![("Cookie".to_string(), value)]
            }
            AuthScheme::ApiToken(token) => vec![(
                "Authorization".to_string(),
                format!("Token {}", token.expose_secret()),
            )],
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the cookie-pair from a `Set-Cookie` value, ignoring attributes.
fn parse_set_cookie(value: &str) -> Option<(String, String)> {
    let pair = value.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seqno_increases_per_call() {
        let session = Session::new();
        assert_eq!(session.next_seqno(), 1);
        assert_eq!(session.next_seqno(), 2);
        assert_eq!(session.next_seqno(), 3);
    }

    #[test]
    fn test_anonymous_session_has_no_auth_headers() {
        let session = Session::new();
        assert!(session.auth_headers().is_empty());
        assert!(!session.has_cookies());
        assert!(!session.is_token_auth());
    }

    #[test]
    fn test_store_cookies_builds_cookie_header() {
        let session = Session::new();
        session.store_cookies([
            "velocloud.session=abc123; Path=/; HttpOnly",
            "velocloud.message=ok",
        ]);

        assert!(session.has_cookies());
        assert_eq!(
            session.auth_headers(),
            vec![(
                "Cookie".to_string(),
                "velocloud.session=abc123; velocloud.message=ok".to_string()
            )]
        );
    }

    #[test]
    fn test_promote_to_token_replaces_cookies() {
        let session = Session::new();
        session.store_cookies(["velocloud.session=abc123"]);
        session.promote_to_token(SecretString::new("secret-xyz".to_string()));

        assert!(session.is_token_auth());
        assert!(!session.has_cookies());
        assert_eq!(
            session.auth_headers(),
            vec![("Authorization".to_string(), "Token secret-xyz".to_string())]
        );
    }

    #[test]
    fn test_parse_set_cookie_ignores_attributes() {
        assert_eq!(
            parse_set_cookie("a=b; Secure; HttpOnly"),
            Some(("a".to_string(), "b".to_string()))
        );
        assert_eq!(parse_set_cookie("malformed"), None);
    }

    #[test]
    fn test_auth_scheme_debug_redacts_token() {
        let scheme = AuthScheme::ApiToken(SecretString::new("secret-xyz".to_string()));
        let debug = format!("{:?}", scheme);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-xyz"));
    }
}
