//! Error types for the kitlist library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all kitlist operations.
#[derive(Error, Debug)]
pub enum KitlistError {
    /// State store connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A catalog file failed to load or validate
    #[error("Catalog error in '{file}': {reason}")]
    Catalog { file: String, reason: String },
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
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl KitlistError {
    /// Creates a database error with context about the failed operation.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a catalog error for a specific data file.
    pub fn catalog(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Catalog {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
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
        self.map_err(|e| KitlistError::database(message, e))
    }
}

/// Result type alias for kitlist operations
pub type Result<T> = std::result::Result<T, KitlistError>;
