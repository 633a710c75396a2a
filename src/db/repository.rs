//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the API layer.
//!
//! Methods return `impl Future + Send` so generic axum handlers stay `Send`;
//! implementations can still be written with `async fn`.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewTerm, Term, TermPatch},
};

/// Repository for Term operations.
pub trait TermRepository: Send + Sync {
    /// Get all terms, ordered by title ascending.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Term>>> + Send;

    /// Look up a term by keyword.
    fn find_by_keyword(&self, keyword: &str)
    -> impl Future<Output = DbResult<Option<Term>>> + Send;

    /// Get a term by keyword, failing with `NotFound` if absent.
    fn get(&self, keyword: &str) -> impl Future<Output = DbResult<Term>> + Send;

    /// Create a new term. Fails with `AlreadyExists` if the keyword is taken.
    fn create(&self, term: &NewTerm) -> impl Future<Output = DbResult<Term>> + Send;

    /// Apply a partial update and refresh `updated_at`.
    fn update(
        &self,
        keyword: &str,
        patch: &TermPatch,
    ) -> impl Future<Output = DbResult<Term>> + Send;

    /// Delete a term by keyword.
    fn delete(&self, keyword: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Insert every term whose keyword is not already stored.
    ///
    /// Returns the number of rows inserted.
    fn insert_missing(&self, terms: &[NewTerm]) -> impl Future<Output = DbResult<usize>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Terms<'a>: TermRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the term repository.
    fn terms(&self) -> Self::Terms<'_>;

    /// Release every pooled connection.
    fn close(&self) -> impl Future<Output = ()> + Send;
}
