//! Configuration Types
//!
//! VCO client configuration types.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigurationError;

/// VCO client configuration.
#[derive(Clone, Debug)]
pub struct VcoConfig {
    /// Orchestrator host. A bare hostname is addressed over HTTPS; a full
    /// `http(s)://` base URL is used verbatim.
    pub hostname: String,
    /// Actor role the token operations are performed as.
    pub user_type: UserType,
    /// Login credentials.
    pub credentials: Credentials,
    /// HTTP timeout.
    pub timeout: Duration,
    /// Skip TLS certificate verification.
    pub insecure: bool,
}

impl VcoConfig {
    fn base_url(&self) -> String {
        let host = self.hostname.trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// Endpoint for standard portal methods.
    pub fn portal_url(&self) -> String {
        format!("{}/portal/", self.base_url())
    }

    /// Endpoint for live-pull methods.
    pub fn livepull_url(&self) -> String {
        format!("{}/livepull/liveData/", self.base_url())
    }

    /// Login endpoint for the configured user type.
    pub fn login_url(&self) -> String {
        let path = if self.user_type.is_operator() {
            "operatorLogin"
        } else {
            "enterpriseLogin"
        };
        format!("{}/portal/rest/login/{}", self.base_url(), path)
    }
}

/// Login credentials.
#[derive(Clone)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: SecretString,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Actor role against the Orchestrator.
///
/// Determines the login endpoint and the prefix every token method is
/// qualified with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Operator,
    Enterprise,
    Proxy,
    Msp,
}

impl UserType {
    /// Method prefix for token operations.
    pub fn method_prefix(&self) -> &'static str {
        match self {
            Self::Operator => "network",
            Self::Enterprise => "enterprise",
            Self::Proxy | Self::Msp => "enterpriseProxy",
        }
    }

    /// Whether this role logs in through the operator endpoint.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operator => "OPERATOR",
            Self::Enterprise => "ENTERPRISE",
            Self::Proxy => "PROXY",
            Self::Msp => "MSP",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // PARTNER is the legacy spelling of the proxy role.
        match s.to_ascii_uppercase().as_str() {
            "OPERATOR" => Ok(Self::Operator),
            "ENTERPRISE" => Ok(Self::Enterprise),
            "PROXY" | "PARTNER" => Ok(Self::Proxy),
            "MSP" => Ok(Self::Msp),
            _ => Err(ConfigurationError::UnknownUserType {
                value: s.to_string(),
            }),
        }
    }
}

/// Default configuration values.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TOKEN_NAME: &str = "API_TOKEN_NAME";
pub const DEFAULT_TOKEN_LIFETIME_MS: u64 = 300_000;

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(user_type: UserType, hostname: &str) -> VcoConfig {
        VcoConfig {
            hostname: hostname.to_string(),
            user_type,
            credentials: Credentials {
                username: "admin@example.com".to_string(),
                password: SecretString::new("hunter2".to_string()),
            },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            insecure: false,
        }
    }

    #[test]
    fn test_method_prefix_mapping() {
        assert_eq!(UserType::Operator.method_prefix(), "network");
        assert_eq!(UserType::Enterprise.method_prefix(), "enterprise");
        assert_eq!(UserType::Proxy.method_prefix(), "enterpriseProxy");
        assert_eq!(UserType::Msp.method_prefix(), "enterpriseProxy");
    }

    #[test]
    fn test_user_type_from_str() {
        assert_eq!("OPERATOR".parse::<UserType>().unwrap(), UserType::Operator);
        assert_eq!("enterprise".parse::<UserType>().unwrap(), UserType::Enterprise);
        assert_eq!("PROXY".parse::<UserType>().unwrap(), UserType::Proxy);
        assert_eq!("PARTNER".parse::<UserType>().unwrap(), UserType::Proxy);
        assert_eq!("MSP".parse::<UserType>().unwrap(), UserType::Msp);
        assert!("CUSTOMER".parse::<UserType>().is_err());
    }

    #[test]
    fn test_endpoint_urls() {
        let config = config_for(UserType::Enterprise, "vco12.example.net");
        assert_eq!(config.portal_url(), "https://vco12.example.net/portal/");
        assert_eq!(
            config.livepull_url(),
            "https://vco12.example.net/livepull/liveData/"
        );
        assert_eq!(
            config.login_url(),
            "https://vco12.example.net/portal/rest/login/enterpriseLogin"
        );
    }

    #[test]
    fn test_operator_login_url() {
        let config = config_for(UserType::Operator, "vco12.example.net");
        assert_eq!(
            config.login_url(),
            "https://vco12.example.net/portal/rest/login/operatorLogin"
        );
    }

    #[test]
    fn test_explicit_scheme_preserved() {
        let config = config_for(UserType::Enterprise, "http://127.0.0.1:9090");
        assert_eq!(config.portal_url(), "http://127.0.0.1:9090/portal/");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let config = config_for(UserType::Enterprise, "vco12.example.net");
        let debug = format!("{:?}", config.credentials);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}
