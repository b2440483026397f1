//! JSON-RPC Channel
//!
//! Builds JSON-RPC 2.0 envelopes, routes them to the portal or live-pull
//! endpoint, and maps `error` members in responses to typed API errors.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::{HttpMethod, HttpRequest, HttpTransport, Session};
use crate::error::{ApiError, ProtocolError, VcoError};
use crate::types::VcoConfig;

/// Methods served by the live-pull endpoint; everything else goes to the portal.
pub const LIVE_PULL_METHODS: [&str; 3] = [
    "liveMode/readLiveData",
    "liveMode/requestLiveActions",
    "liveMode/clientExitLiveMode",
];

/// Endpoint a method is dispatched to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Portal,
    LivePull,
}

/// Select the endpoint for a (cleaned) method name.
pub fn endpoint_for(method: &str) -> Endpoint {
    if LIVE_PULL_METHODS.contains(&method) {
        Endpoint::LivePull
    } else {
        Endpoint::Portal
    }
}

/// Strip leading slashes from a method name.
pub fn clean_method_name(method: &str) -> &str {
    method.trim_start_matches('/')
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a serde_json::Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
    #[serde(default)]
    result: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    #[serde(default)]
    code: i64,
    message: String,
}

/// JSON-RPC channel bound to one session.
pub struct RpcChannel<T: HttpTransport> {
    config: VcoConfig,
    transport: Arc<T>,
    session: Arc<Session>,
}

impl<T: HttpTransport> RpcChannel<T> {
    /// Create a channel over an existing session.
    pub fn new(config: VcoConfig, transport: Arc<T>, session: Arc<Session>) -> Self {
        Self {
            config,
            transport,
            session,
        }
    }

    /// Invoke a JSON-RPC method and return its `result` member.
    ///
    /// The request id is the session sequence number, incremented per call.
    /// A response carrying an `error` member becomes [`VcoError::Api`] with
    /// the server-supplied message.
    pub async fn call(
        &self,
        method: &str,
        params: &serde_json::Value,
    ) -> Result<serde_json::Value, VcoError> {
        let method = clean_method_name(method);
        let id = self.session.next_seqno();

        let url = match endpoint_for(method) {
            Endpoint::Portal => self.config.portal_url(),
            Endpoint::LivePull => self.config.livepull_url(),
        };

        let envelope = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let body = serde_json::to_string(&envelope).map_err(|e| {
            VcoError::Protocol(ProtocolError::InvalidJson {
                message: e.to_string(),
            })
        })?;

        let mut headers = vec![(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )];
        headers.extend(self.session.auth_headers());

        tracing::debug!(method, id, url = %url, "dispatching JSON-RPC call");

        let response = self
            .transport
            .send(HttpRequest {
                method: HttpMethod::Post,
                url,
                headers,
                body: Some(body),
                timeout: Some(self.config.timeout),
            })
            .await?;

        let parsed: JsonRpcResponse = match serde_json::from_str(&response.body) {
            Ok(parsed) => parsed,
            Err(e) if response.is_success() => {
                return Err(VcoError::Protocol(ProtocolError::InvalidJson {
                    message: e.to_string(),
                }));
            }
            Err(_) => {
                return Err(VcoError::Protocol(ProtocolError::UnexpectedStatus {
                    status: response.status,
                }));
            }
        };

        if let Some(error) = parsed.error {
            tracing::debug!(method, code = error.code, "server returned API error");
            return Err(VcoError::Api(ApiError {
                method: method.to_string(),
                code: error.code,
                message: error.message,
            }));
        }

        if !response.is_success() {
            return Err(VcoError::Protocol(ProtocolError::UnexpectedStatus {
                status: response.status,
            }));
        }

        parsed.result.ok_or_else(|| {
            VcoError::Protocol(ProtocolError::MissingField {
                field: "result".to_string(),
            })
        })
    }
}
