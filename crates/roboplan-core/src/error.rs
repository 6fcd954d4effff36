//! Error types for the ROBOPLAN workspace.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// A shared error type for every layer of ROBOPLAN.
///
/// The first four variants form the failure taxonomy callers switch on.
/// The remaining variants describe infrastructure problems (solver transport,
/// configuration, files) and are mapped by the services where needed.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanError {
    /// Malformed request or solver-reported bad input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A Building/Floor/Room/Elevator/Robisep/Task lookup came back empty
    #[error("{message}")]
    EntityDoesNotExist {
        entity_type: String,
        message: String,
    },

    /// Unexpected repository failure
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Propagated from upstream, never produced by the planning core
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The external solver answered with a non-success status or garbage
    #[error("Solver gateway error: {0}")]
    Gateway(String),

    /// The external solver did not answer in time
    #[error("Solver call '{operation}' timed out after {after:?}")]
    Timeout { operation: String, after: Duration },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl PlanError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an EntityDoesNotExist error with a caller-facing message
    pub fn not_found(entity_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EntityDoesNotExist {
            entity_type: entity_type.into(),
            message: message.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a DatabaseError
    pub fn database(message: impl Into<String>) -> Self {
        Self::DatabaseError(message.into())
    }

    /// Creates a Gateway error
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an EntityDoesNotExist error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityDoesNotExist { .. })
    }

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a DatabaseError
    pub fn is_database_error(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }

    /// Check if the error came out of a solver call (bad status or timeout).
    pub fn is_gateway_failure(&self) -> bool {
        matches!(self, Self::Gateway(_) | Self::Timeout { .. })
    }

    /// Turns anything that is not already part of the caller-facing
    /// taxonomy into a `DatabaseError`.
    ///
    /// Used at the outermost boundary of an operation, where an unexpected
    /// repository failure must surface as a database problem.
    pub fn into_boundary(self) -> Self {
        match self {
            Self::InvalidInput(_)
            | Self::EntityDoesNotExist { .. }
            | Self::DatabaseError(_)
            | Self::Unauthorized(_) => self,
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PlanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PlanError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PlanError>`.
pub type Result<T> = std::result::Result<T, PlanError>;
