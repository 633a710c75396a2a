//! Database error types.
//!
//! Storage-agnostic errors for repository operations, using thiserror for
//! the derives and miette for diagnostic codes. The API layer maps these
//! variants onto HTTP status codes.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with key '{key}'")]
    #[diagnostic(code(glossary::db::not_found))]
    NotFound { entity_type: String, key: String },

    #[error("Entity already exists: {entity_type} with key '{key}'")]
    #[diagnostic(code(glossary::db::already_exists))]
    AlreadyExists { entity_type: String, key: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(glossary::db::validation_error))]
    Validation { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(glossary::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(glossary::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(glossary::db::connection_error),
        help("Check that the database file is reachable and not locked by another process.")
    )]
    Connection { message: String },
}

impl DbError {
    pub(crate) fn term_not_found(keyword: &str) -> Self {
        DbError::NotFound {
            entity_type: "Term".to_string(),
            key: keyword.to_string(),
        }
    }

    pub(crate) fn term_exists(keyword: &str) -> Self {
        DbError::AlreadyExists {
            entity_type: "Term".to_string(),
            key: keyword.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
