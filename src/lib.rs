//! VCO Integration Module
//!
//! Client for the VeloCloud Orchestrator (VCO) JSON-RPC API, covering the
//! API token lifecycle: authenticate with credentials, create a short-lived
//! token, download its secret value, exercise it, and revoke it.
//!
//! # Features
//!
//! - Cookie-based login (operator and enterprise endpoints)
//! - JSON-RPC 2.0 envelopes with per-session request ids
//! - Portal vs. live-pull endpoint routing
//! - Token create / download / list / revoke, prefix-qualified per role
//! - Mid-sequence switch from session cookies to `Authorization: Token`
//!
//! # Example
//!
//! ```rust,ignore
//! use vco_integration::{vco_config, ApiTokenParams, UserType, VcoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = vco_config()
//!         .hostname("vco12.example.net")
//!         .username("admin@example.com")
//!         .password("s3cret")
//!         .user_type(UserType::Enterprise)
//!         .build()?;
//!
//!     let client = VcoClient::new(config)?;
//!     client.authenticate().await?;
//!
//!     let params = ApiTokenParams::for_enterprise(1, 1, "API_TOKEN_NAME", 300_000);
//!     let token_id = client.run_token_lifecycle(params).await?;
//!     println!("exercised and revoked token {}", token_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The module is organized into several sub-modules:
//!
//! - `types`: configuration and token data structures
//! - `error`: error hierarchy with the server-reported API error
//! - `core`: HTTP transport, session state, JSON-RPC channel
//! - `token`: token lifecycle operations and the ordered sequence
//! - `builders`: fluent configuration builder
//! - `client`: high-level client combining login and token operations

pub mod builders;
pub mod client;
pub mod core;
pub mod error;
pub mod token;
pub mod types;

// Re-export main client
pub use client::VcoClient;

// Re-export builders
pub use builders::{vco_config, VcoConfigBuilder};

// Re-export errors
pub use error::{
    ApiError, AuthError, ConfigurationError, NetworkError, ProtocolError, VcoError, VcoResult,
};

// Re-export types
pub use types::{
    ApiTokenParams, CreatedToken, Credentials, DownloadedToken, TokenId, UserType, VcoConfig,
    DEFAULT_TOKEN_LIFETIME_MS, DEFAULT_TOKEN_NAME,
};

// Re-export core components
pub use core::{
    clean_method_name, endpoint_for, Endpoint, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, MockHttpTransport, ReqwestHttpTransport, RpcChannel, Session,
    LIVE_PULL_METHODS,
};

// Re-export token lifecycle
pub use token::{DefaultTokenLifecycle, TokenLifecycle};
