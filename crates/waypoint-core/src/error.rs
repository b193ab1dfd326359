//! Error types for the waypoint library.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::ModelAttempt;

/// Comprehensive error type for all waypoint operations.
///
/// Pipeline failures keep their technical detail here; they are turned into
/// user-facing messages by [`crate::pipeline::classify_error`].
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// No API key was configured for the generation service
    #[error("API key is missing. Set WAYPOINT_API_KEY or pass --api-key.")]
    MissingCredential,
    /// The generation service rejected or failed a single call
    #[error("{model}: {message}")]
    Service { model: String, message: String },
    /// Every candidate model failed its probe
    #[error(
        "No compatible model found after {} attempt(s). The API might be experiencing issues.",
        .attempts.len()
    )]
    NoCompatibleModel { attempts: Vec<ModelAttempt> },
    /// The model reply could not be parsed as JSON
    #[error("Failed to parse AI response: {source}")]
    UnparsableResponse {
        text: String,
        #[source]
        source: serde_json::Error,
    },
    /// The model reply parsed but is not a non-empty array
    #[error("Invalid plan structure: {reason}")]
    InvalidPlanStructure { reason: String },
    /// A history entry with the given ID does not exist
    #[error("Plan with ID {id} not found in history")]
    PlanNotFound { id: i64 },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a service error for a single failed model call.
    pub fn service(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            model: model.into(),
            message: message.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Extension trait for joining blocking tasks spawned on the tokio runtime.
pub trait JoinResultExt<T> {
    /// Map a task join failure into a configuration error.
    fn join_context(self) -> Result<T>;
}

impl<T> JoinResultExt<T> for std::result::Result<T, tokio::task::JoinError> {
    fn join_context(self) -> Result<T> {
        self.map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, PlannerError>;
