//! Domain models for the glossary database.
//!
//! These models are storage-agnostic. Field constraints live here so every
//! entry point (HTTP handlers, the seed routine) validates the same way
//! before anything reaches the store.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{DbError, DbResult};

/// Maximum keyword length, in characters.
pub const KEYWORD_MAX_LEN: usize = 128;

/// Maximum title length, in characters.
pub const TITLE_MAX_LEN: usize = 256;

/// A glossary term.
///
/// `keyword` is the public lookup key and is unique across all terms.
/// Only `title` and `description` change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: i64,
    pub keyword: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a term. Also the entry type of seed catalogues.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTerm {
    pub keyword: String,
    pub title: String,
    pub description: String,
}

impl NewTerm {
    pub fn new(
        keyword: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Check field constraints.
    pub fn validate(&self) -> DbResult<()> {
        check_bounded("keyword", &self.keyword, KEYWORD_MAX_LEN)?;
        check_bounded("title", &self.title, TITLE_MAX_LEN)?;
        check_non_empty("description", &self.description)
    }
}

/// Partial update of a term. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TermPatch {
    /// Check constraints on the fields that are present.
    pub fn validate(&self) -> DbResult<()> {
        if let Some(title) = &self.title {
            check_bounded("title", title, TITLE_MAX_LEN)?;
        }
        if let Some(description) = &self.description {
            check_non_empty("description", description)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

fn check_non_empty(field: &str, value: &str) -> DbResult<()> {
    if value.is_empty() {
        return Err(DbError::Validation {
            message: format!("{} must not be empty", field),
        });
    }
    Ok(())
}

fn check_bounded(field: &str, value: &str, max: usize) -> DbResult<()> {
    check_non_empty(field, value)?;
    let len = value.chars().count();
    if len > max {
        return Err(DbError::Validation {
            message: format!("{} must be at most {} characters (got {})", field, max, len),
        });
    }
    Ok(())
}
