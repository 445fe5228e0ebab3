//! # Error Types
//!
//! Structured error types for risk_core. Submissions only ever produce
//! [`RiskError::ConnectionFailure`]; the reason string is kept for logs and
//! never shown to the end user, who sees [`CONNECTION_NOTICE`] instead.
//!
//! ## Example
//!
//! ```rust
//! use risk_core::errors::{RiskError, RiskResult};
//!
//! fn check_status(code: u16) -> RiskResult<()> {
//!     if code >= 400 {
//!         return Err(RiskError::connection_failure(format!("service returned {}", code)));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_status(502).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic notice shown to the user for any connection failure
pub const CONNECTION_NOTICE: &str = "Error connecting to backend";

/// Result type alias for risk_core operations
pub type RiskResult<T> = Result<T, RiskError>;

/// Structured error type for the risk calculator client.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RiskError {
    /// Transport error, non-success status, timeout or unparsable body
    #[error("Connection failure: {reason}")]
    ConnectionFailure { reason: String },

    /// Configuration file could not be read or parsed
    #[error("Config error: '{path}' - {reason}")]
    Config { path: String, reason: String },
}

impl RiskError {
    /// Create a ConnectionFailure error
    pub fn connection_failure(reason: impl Into<String>) -> Self {
        RiskError::ConnectionFailure {
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        RiskError::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RiskError::ConnectionFailure { .. } => "CONNECTION_FAILURE",
            RiskError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Message suitable for a user-facing notice
    pub fn user_notice(&self) -> String {
        match self {
            RiskError::ConnectionFailure { .. } => CONNECTION_NOTICE.to_string(),
            RiskError::Config { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RiskError::connection_failure("connection refused");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"ConnectionFailure\""));
        let roundtrip: RiskError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RiskError::connection_failure("x").error_code(), "CONNECTION_FAILURE");
        assert_eq!(RiskError::config("a.json", "bad").error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_connection_notice_hides_reason() {
        let error = RiskError::connection_failure("HTTP 500 from 10.0.0.3");
        assert_eq!(error.user_notice(), CONNECTION_NOTICE);
    }
}
