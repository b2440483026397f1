//! Token Lifecycle
//!
//! API token operations: create, download, list, revoke — plus the ordered
//! end-to-end sequence that exercises a token and revokes it again.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::{HttpTransport, RpcChannel, Session};
use crate::error::{ProtocolError, VcoError};
use crate::types::{ApiTokenParams, CreatedToken, DownloadedToken, TokenId, VcoConfig};

/// Token lifecycle interface.
#[async_trait]
pub trait TokenLifecycle: Send + Sync {
    /// Create a new API token; the result carries its id.
    async fn create_token(&self, params: &ApiTokenParams) -> Result<CreatedToken, VcoError>;

    /// Download the secret value of a previously created token.
    ///
    /// `params.id` must be the id returned by create. On success the session
    /// switches to bearer-token authentication and drops its cookies.
    async fn download_token(&self, params: &ApiTokenParams) -> Result<DownloadedToken, VcoError>;

    /// List the caller's API tokens. Issued with empty parameters; an
    /// invalid or expired token surfaces as an API error.
    async fn list_tokens(&self) -> Result<serde_json::Value, VcoError>;

    /// Revoke a token using the same parameters as create, including `id`.
    async fn revoke_token(&self, params: &ApiTokenParams) -> Result<(), VcoError>;
}

/// Default lifecycle implementation over a JSON-RPC channel.
pub struct DefaultTokenLifecycle<T: HttpTransport> {
    config: VcoConfig,
    channel: RpcChannel<T>,
    session: Arc<Session>,
}

impl<T: HttpTransport> DefaultTokenLifecycle<T> {
    /// Create a lifecycle bound to an authenticated session.
    pub fn new(config: VcoConfig, transport: Arc<T>, session: Arc<Session>) -> Self {
        let channel = RpcChannel::new(config.clone(), transport, session.clone());
        Self {
            config,
            channel,
            session,
        }
    }

    fn method(&self, operation: &str) -> String {
        format!("{}/{}", self.config.user_type.method_prefix(), operation)
    }

    fn params_value(params: &ApiTokenParams) -> Result<serde_json::Value, VcoError> {
        serde_json::to_value(params).map_err(|e| {
            VcoError::Protocol(ProtocolError::InvalidJson {
                message: e.to_string(),
            })
        })
    }

    /// Run the full sequence: create, download, list, revoke.
    ///
    /// Strictly ordered; the first failing step aborts the remainder, with
    /// no rollback and no retry. Returns the id of the exercised token.
    pub async fn execute(&self, params: ApiTokenParams) -> Result<TokenId, VcoError> {
        let created = self.create_token(&params).await?;
        tracing::info!(id = %created.id, "created API token");

        let params = params.with_id(created.id.clone());
        self.download_token(&params).await?;
        tracing::info!(id = %created.id, "downloaded API token, session now token-authenticated");

        self.list_tokens().await?;
        tracing::info!("token accepted by getApiTokens");

        self.revoke_token(&params).await?;
        tracing::info!(id = %created.id, "revoked API token");

        Ok(created.id)
    }
}

#[async_trait]
impl<T: HttpTransport> TokenLifecycle for DefaultTokenLifecycle<T> {
    async fn create_token(&self, params: &ApiTokenParams) -> Result<CreatedToken, VcoError> {
        let result = self
            .channel
            .call(&self.method("createApiToken"), &Self::params_value(params)?)
            .await?;

        serde_json::from_value(result).map_err(|_| {
            VcoError::Protocol(ProtocolError::MissingField {
                field: "id".to_string(),
            })
        })
    }

    async fn download_token(&self, params: &ApiTokenParams) -> Result<DownloadedToken, VcoError> {
        let result = self
            .channel
            .call(&self.method("downloadApiToken"), &Self::params_value(params)?)
            .await?;

        let downloaded: DownloadedToken = serde_json::from_value(result).map_err(|e| {
            VcoError::Protocol(ProtocolError::InvalidJson {
                message: e.to_string(),
            })
        })?;

        match &downloaded.token {
            Some(secret) => self.session.promote_to_token(secret.clone()),
            None => {
                return Err(VcoError::Protocol(ProtocolError::MissingField {
                    field: "token".to_string(),
                }))
            }
        }

        Ok(downloaded)
    }

    async fn list_tokens(&self) -> Result<serde_json::Value, VcoError> {
        self.channel
            .call(&self.method("getApiTokens"), &serde_json::json!({}))
            .await
    }

    async fn revoke_token(&self, params: &ApiTokenParams) -> Result<(), VcoError> {
        self.channel
            .call(&self.method("revokeApiToken"), &Self::params_value(params)?)
            .await?;
        Ok(())
    }
}
