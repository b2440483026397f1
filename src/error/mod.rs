//! VCO Error Types
//!
//! Error hierarchy for the Orchestrator integration.

use std::time::Duration;
use thiserror::Error;

/// Root error type for the VCO integration.
#[derive(Error, Debug)]
pub enum VcoError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl VcoError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "VCO_CONFIG",
            Self::Auth(_) => "VCO_AUTH",
            Self::Api(_) => "VCO_API",
            Self::Network(_) => "VCO_NETWORK",
            Self::Protocol(_) => "VCO_PROTOCOL",
        }
    }

    /// Check if error requires re-authentication.
    pub fn needs_reauth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid Orchestrator host: {host}")]
    InvalidHost { host: String },

    #[error("Unknown user type: {value}")]
    UnknownUserType { value: String },
}

/// Authentication error.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login rejected with HTTP {status}")]
    LoginFailed { status: u16 },

    #[error("Login succeeded but no session cookie was issued")]
    MissingSessionCookie,

    #[error("Operation requires an authenticated session")]
    NotAuthenticated,
}

/// API error reported by the Orchestrator.
///
/// Raised whenever a JSON-RPC response body carries an `error` member; the
/// message is the server-supplied one.
#[derive(Error, Debug, Clone)]
#[error("{method}: {message} (code {code})")]
pub struct ApiError {
    /// Method that was invoked.
    pub method: String,
    /// JSON-RPC error code.
    pub code: i64,
    /// Server-supplied error message.
    pub message: String,
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Protocol/response parsing error.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Missing required field in result: {field}")]
    MissingField { field: String },

    #[error("Unexpected redirect to: {location}")]
    UnexpectedRedirect { location: String },

    #[error("Response too large: {size} bytes")]
    ResponseTooLarge { size: usize },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },
}

/// Result type for VCO operations.
pub type VcoResult<T> = Result<T, VcoError>;
