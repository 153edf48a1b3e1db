//! Error types for the booking library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all booking and local-time operations.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No authenticated principal was available
    #[error("Unauthorized")]
    Unauthorized,
    /// The principal has no user record with the required role
    #[error("{role} not found for principal '{principal}'")]
    UserNotFound { principal: String, role: String },
    /// A date string or stored time could not be interpreted
    #[error("Unparsable date '{input}': {reason}")]
    UnparsableDate { input: String, reason: String },
    /// An IANA time zone identifier could not be resolved
    #[error("Unknown time zone '{name}'")]
    UnknownTimezone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    /// Date arithmetic or rendering failed inside jiff
    #[error("Time error: {message}")]
    Time {
        message: String,
        #[source]
        source: jiff::Error,
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
    pub fn with_source(self, source: rusqlite::Error) -> BookingError {
        BookingError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> BookingError {
        BookingError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BookingError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unparsable-date error for the given input.
    pub fn unparsable(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnparsableDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a jiff error with a short description of what was attempted.
    pub fn time(message: impl Into<String>, source: jiff::Error) -> Self {
        Self::Time {
            message: message.into(),
            source,
        }
    }

    /// Maps a blocking task join failure into a configuration error.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
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
        self.map_err(|e| BookingError::database(message).with_source(e))
    }
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;
