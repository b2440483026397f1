//! VCO Client
//!
//! High-level client combining login, the JSON-RPC channel, and the token
//! lifecycle operations.

use secrecy::ExposeSecret;
use std::sync::Arc;

use crate::core::{HttpMethod, HttpRequest, HttpTransport, ReqwestHttpTransport, Session};
use crate::error::{AuthError, ProtocolError, VcoError};
use crate::token::{DefaultTokenLifecycle, TokenLifecycle};
use crate::types::{ApiTokenParams, CreatedToken, DownloadedToken, TokenId, VcoConfig};

/// Client for token lifecycle operations against one Orchestrator.
pub struct VcoClient<T: HttpTransport = ReqwestHttpTransport> {
    config: VcoConfig,
    transport: Arc<T>,
    session: Arc<Session>,
}

impl VcoClient<ReqwestHttpTransport> {
    /// Create a new client with the default reqwest transport.
    pub fn new(config: VcoConfig) -> Result<Self, VcoError> {
        let transport =
            ReqwestHttpTransport::with_options(config.timeout, 1048576, config.insecure)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> VcoClient<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: VcoConfig, transport: T) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
            session: Arc::new(Session::new()),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &VcoConfig {
        &self.config
    }

    /// Get the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Log in with the configured credentials and store the session cookies.
    ///
    /// Operators authenticate through `operatorLogin`, every other role
    /// through `enterpriseLogin`. Failure is fatal to the sequence; the
    /// caller reports it and does not retry.
    pub async fn authenticate(&self) -> Result<(), VcoError> {
        let url = self.config.login_url();
        let body = serde_json::json!({
            "username": self.config.credentials.username,
            "password": self.config.credentials.password.expose_secret(),
        });
        let body = serde_json::to_string(&body).map_err(|e| {
            VcoError::Protocol(ProtocolError::InvalidJson {
                message: e.to_string(),
            })
        })?;

        tracing::debug!(url = %url, username = %self.config.credentials.username, "logging in");

        let response = self
            .transport
            .send(HttpRequest {
                method: HttpMethod::Post,
                url,
                headers: vec![("Content-Type".to_string(), "application/json".to_string())],
                body: Some(body),
                timeout: Some(self.config.timeout),
            })
            .await?;

        if !response.is_success() {
            return Err(VcoError::Auth(AuthError::LoginFailed {
                status: response.status,
            }));
        }

        let cookies = response.set_cookies();
        if cookies.is_empty() {
            return Err(VcoError::Auth(AuthError::MissingSessionCookie));
        }
        self.session.store_cookies(cookies);

        tracing::info!("authenticated, session cookies stored");
        Ok(())
    }

    fn lifecycle(&self) -> DefaultTokenLifecycle<T> {
        DefaultTokenLifecycle::new(
            self.config.clone(),
            self.transport.clone(),
            self.session.clone(),
        )
    }

    fn require_session(&self) -> Result<(), VcoError> {
        if self.session.has_cookies() || self.session.is_token_auth() {
            Ok(())
        } else {
            Err(VcoError::Auth(AuthError::NotAuthenticated))
        }
    }

    // ========== Token Lifecycle ==========

    /// Create a new API token.
    pub async fn create_token(&self, params: &ApiTokenParams) -> Result<CreatedToken, VcoError> {
        self.require_session()?;
        self.lifecycle().create_token(params).await
    }

    /// Download a token's secret value; switches the session to bearer auth.
    pub async fn download_token(
        &self,
        params: &ApiTokenParams,
    ) -> Result<DownloadedToken, VcoError> {
        self.require_session()?;
        self.lifecycle().download_token(params).await
    }

    /// List the caller's API tokens.
    pub async fn list_tokens(&self) -> Result<serde_json::Value, VcoError> {
        self.require_session()?;
        self.lifecycle().list_tokens().await
    }

    /// Revoke a token.
    pub async fn revoke_token(&self, params: &ApiTokenParams) -> Result<(), VcoError> {
        self.require_session()?;
        self.lifecycle().revoke_token(params).await
    }

    /// Run the full create → download → list → revoke sequence.
    pub async fn run_token_lifecycle(&self, params: ApiTokenParams) -> Result<TokenId, VcoError> {
        self.require_session()?;
        if !params.matches_user_type(self.config.user_type) {
            return Err(VcoError::Configuration(
                crate::error::ConfigurationError::InvalidConfig {
                    message: format!(
                        "token parameters do not match user type {}",
                        self.config.user_type
                    ),
                },
            ));
        }
        self.lifecycle().execute(params).await
    }
}
