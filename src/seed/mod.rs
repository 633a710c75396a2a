//! Startup seeding of default glossary terms.
//!
//! The seed routine takes its catalogue as data: the built-in default, a
//! JSON file, or nothing at all. It only inserts keywords that are not
//! already stored, so running it on every startup is safe.

mod catalogue;


use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::{info, instrument};

use crate::db::{Database, DbError, NewTerm, TermRepository};

pub use catalogue::default_catalogue;

/// Seeding errors.
#[derive(Error, Diagnostic, Debug)]
pub enum SeedError {
    #[error("Failed to read seed catalogue {path}: {source}")]
    #[diagnostic(code(glossary::seed::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed catalogue {path}: {source}")]
    #[diagnostic(
        code(glossary::seed::parse),
        help("The catalogue must be a JSON array of objects with keyword, title and description fields.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid seed entry '{keyword}': {source}")]
    #[diagnostic(code(glossary::seed::invalid_entry))]
    InvalidEntry {
        keyword: String,
        #[source]
        source: DbError,
    },

    #[error("Duplicate keyword '{keyword}' in seed catalogue")]
    #[diagnostic(code(glossary::seed::duplicate_keyword))]
    DuplicateKeyword { keyword: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),
}

/// Where the startup catalogue comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// The built-in pattern-recognition catalogue.
    #[default]
    Default,
    /// A JSON array of terms on disk.
    File(PathBuf),
    /// Skip seeding.
    Disabled,
}

impl SeedSource {
    /// Resolve the source into a catalogue.
    pub fn load(&self) -> Result<Vec<NewTerm>, SeedError> {
        match self {
            SeedSource::Default => Ok(default_catalogue()),
            SeedSource::File(path) => load_catalogue(path),
            SeedSource::Disabled => Ok(Vec::new()),
        }
    }
}

/// Read a catalogue from a JSON file.
pub fn load_catalogue(path: &Path) -> Result<Vec<NewTerm>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Check every entry before anything is written.
pub fn validate_catalogue(catalogue: &[NewTerm]) -> Result<(), SeedError> {
    let mut seen = std::collections::HashSet::new();
    for term in catalogue {
        term.validate().map_err(|source| SeedError::InvalidEntry {
            keyword: term.keyword.clone(),
            source,
        })?;
        if !seen.insert(term.keyword.as_str()) {
            return Err(SeedError::DuplicateKeyword {
                keyword: term.keyword.clone(),
            });
        }
    }
    Ok(())
}

/// Insert every catalogue term whose keyword is not yet stored.
///
/// Returns the number of terms inserted.
#[instrument(skip(db, catalogue), fields(entries = catalogue.len()))]
pub async fn seed_terms<D: Database>(db: &D, catalogue: &[NewTerm]) -> Result<usize, SeedError> {
    validate_catalogue(catalogue)?;

    if catalogue.is_empty() {
        return Ok(0);
    }

    let inserted = db.terms().insert_missing(catalogue).await?;
    info!(inserted, "Seeded glossary terms");

    Ok(inserted)
}
