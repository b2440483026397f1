//! Token Types
//!
//! API token request and response types.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::UserType;

/// API token identifier as issued by the Orchestrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TokenId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for TokenId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Parameters for the token methods.
///
/// The serialized shape is role-dependent: only the identifier fields for the
/// acting role are present. The same object is reused across create, download
/// and revoke; download and revoke additionally carry the `id` returned by
/// create.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_proxy_id: Option<u64>,
    /// Display name for the token.
    pub name: String,
    /// Token lifetime in milliseconds.
    pub lifetime_ms: u64,
    /// Token id, present only after create has issued one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TokenId>,
}

impl ApiTokenParams {
    /// Parameters for an operator-level token.
    pub fn for_operator(operator_user_id: u64, name: impl Into<String>, lifetime_ms: u64) -> Self {
        Self {
            operator_user_id: Some(operator_user_id),
            enterprise_user_id: None,
            enterprise_id: None,
            enterprise_proxy_id: None,
            name: name.into(),
            lifetime_ms,
            id: None,
        }
    }

    /// Parameters for an enterprise-level token.
    pub fn for_enterprise(
        enterprise_user_id: u64,
        enterprise_id: u64,
        name: impl Into<String>,
        lifetime_ms: u64,
    ) -> Self {
        Self {
            operator_user_id: None,
            enterprise_user_id: Some(enterprise_user_id),
            enterprise_id: Some(enterprise_id),
            enterprise_proxy_id: None,
            name: name.into(),
            lifetime_ms,
            id: None,
        }
    }

    /// Parameters for a partner (enterprise proxy / MSP) token.
    pub fn for_proxy(
        enterprise_user_id: u64,
        enterprise_proxy_id: u64,
        name: impl Into<String>,
        lifetime_ms: u64,
    ) -> Self {
        Self {
            operator_user_id: None,
            enterprise_user_id: Some(enterprise_user_id),
            enterprise_id: None,
            enterprise_proxy_id: Some(enterprise_proxy_id),
            name: name.into(),
            lifetime_ms,
            id: None,
        }
    }

    /// Attach the token id returned by create.
    pub fn with_id(mut self, id: TokenId) -> Self {
        self.id = Some(id);
        self
    }

    /// Role identifier consistency check against a user type.
    pub fn matches_user_type(&self, user_type: UserType) -> bool {
        match user_type {
            UserType::Operator => self.operator_user_id.is_some(),
            UserType::Enterprise => {
                self.enterprise_user_id.is_some() && self.enterprise_id.is_some()
            }
            UserType::Proxy | UserType::Msp => {
                self.enterprise_user_id.is_some() && self.enterprise_proxy_id.is_some()
            }
        }
    }
}

/// Result of `createApiToken`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedToken {
    /// Identifier of the newly created token.
    pub id: TokenId,
}

/// Result of `downloadApiToken`.
#[derive(Clone, Deserialize)]
pub struct DownloadedToken {
    /// Identifier of the token, echoed back by the server.
    #[serde(default)]
    pub id: Option<TokenId>,
    /// The secret token value.
    #[serde(default)]
    pub token: Option<SecretString>,
}

impl DownloadedToken {
    /// Authorization header value for the downloaded secret, if present.
    pub fn authorization_header(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|t| format!("Token {}", t.expose_secret()))
    }
}

impl fmt::Debug for DownloadedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadedToken")
            .field("id", &self.id)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
