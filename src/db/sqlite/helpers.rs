//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{DbError, Term};

/// Columns selected for every term query, in `row_to_term` order.
pub const TERM_COLUMNS: &str = "id, keyword, title, description, created_at, updated_at";

/// Map a SQLx error to a storage-agnostic `DbError`.
///
/// Pool exhaustion, a closed pool, and I/O failures mean the store is
/// unavailable; everything else is reported as a plain database error.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DbError::Connection {
                message: e.to_string(),
            }
        }
        _ => DbError::Database {
            message: e.to_string(),
        },
    }
}

/// Whether the error is a UNIQUE constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// Build a `Term` from a row selected with `TERM_COLUMNS`.
pub fn row_to_term(row: &SqliteRow) -> Result<Term, sqlx::Error> {
    Ok(Term {
        id: row.try_get("id")?,
        keyword: row.try_get("keyword")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
