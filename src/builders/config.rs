//! Configuration Builder
//!
//! Fluent builder for VCO client configuration.

use secrecy::SecretString;
use std::time::Duration;

use crate::error::{ConfigurationError, VcoError};
use crate::types::{Credentials, UserType, VcoConfig, DEFAULT_TIMEOUT_SECS};

/// VCO configuration builder.
#[derive(Default)]
pub struct VcoConfigBuilder {
    hostname: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    user_type: Option<UserType>,
    timeout: Option<Duration>,
    insecure: bool,
}

impl VcoConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Orchestrator host (bare hostname or full base URL).
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the login username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the login password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the acting user type.
    pub fn user_type(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }

    /// Set request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skip TLS certificate verification (lab instances only).
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<VcoConfig, VcoError> {
        let hostname = self.hostname.ok_or_else(|| {
            VcoError::Configuration(ConfigurationError::MissingField {
                field: "hostname".to_string(),
            })
        })?;

        let probe = if hostname.contains("://") {
            hostname.clone()
        } else {
            format!("https://{}", hostname)
        };
        if hostname.trim().is_empty() || url::Url::parse(&probe).is_err() {
            return Err(VcoError::Configuration(ConfigurationError::InvalidHost {
                host: hostname,
            }));
        }

        let username = self.username.ok_or_else(|| {
            VcoError::Configuration(ConfigurationError::MissingField {
                field: "username".to_string(),
            })
        })?;

        let password = self.password.ok_or_else(|| {
            VcoError::Configuration(ConfigurationError::MissingField {
                field: "password".to_string(),
            })
        })?;

        let user_type = self.user_type.ok_or_else(|| {
            VcoError::Configuration(ConfigurationError::MissingField {
                field: "user_type".to_string(),
            })
        })?;

        Ok(VcoConfig {
            hostname,
            user_type,
            credentials: Credentials { username, password },
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            insecure: self.insecure,
        })
    }
}

/// Create a new VCO configuration builder.
pub fn vco_config() -> VcoConfigBuilder {
    VcoConfigBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_success() {
        let config = VcoConfigBuilder::new()
            .hostname("vco12.example.net")
            .username("admin@example.com")
            .password("hunter2")
            .user_type(UserType::Enterprise)
            .build()
            .unwrap();

        assert_eq!(config.hostname, "vco12.example.net");
        assert_eq!(config.user_type, UserType::Enterprise);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.insecure);
    }

    #[test]
    fn test_builder_missing_hostname() {
        let result = VcoConfigBuilder::new()
            .username("admin@example.com")
            .password("hunter2")
            .user_type(UserType::Enterprise)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_missing_user_type() {
        let result = VcoConfigBuilder::new()
            .hostname("vco12.example.net")
            .username("admin@example.com")
            .password("hunter2")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_blank_hostname_rejected() {
        let result = VcoConfigBuilder::new()
            .hostname("  ")
            .username("admin@example.com")
            .password("hunter2")
            .user_type(UserType::Operator)
            .build();
        assert!(matches!(
            result,
            Err(VcoError::Configuration(ConfigurationError::InvalidHost { .. }))
        ));
    }

    #[test]
    fn test_builder_custom_timeout_and_insecure() {
        let config = vco_config()
            .hostname("vco12.example.net")
            .username("admin@example.com")
            .password("hunter2")
            .user_type(UserType::Msp)
            .timeout(Duration::from_secs(5))
            .insecure(true)
            .build()
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.insecure);
    }
}
