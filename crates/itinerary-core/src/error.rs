//! Error types for the itinerary library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all itinerary operations.
///
/// Every variant is recoverable at the call site. Placement and trip
/// mutations check their preconditions before touching the schedule, so an
/// error never leaves a half-applied change behind.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Persisted blob is unparsable or structurally invalid
    #[error("Malformed trip data: {reason}")]
    MalformedData { reason: String },
    /// No item with the given identifier exists in the trip
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: String },
    /// Target day index or segment identifier is out of range
    #[error("Invalid destination {field}: {reason}")]
    InvalidDestination { field: String, reason: String },
    /// Segment table has no boundary for a segment an item refers to
    #[error("No boundary defined for segment '{segment}'")]
    SegmentBoundaryMissing { segment: String },
    /// Key-value store connection or query errors
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
    /// Serialization errors while writing a blob
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
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
    pub fn with_source(self, source: rusqlite::Error) -> ItineraryError {
        ItineraryError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> ItineraryError {
        ItineraryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ItineraryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed data error from any displayable reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedData {
            reason: reason.into(),
        }
    }

    /// Creates an invalid destination error for the given field.
    pub fn invalid_destination(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDestination {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an item-not-found error.
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound { id: id.into() }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ItineraryError::database(message).with_source(e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;
