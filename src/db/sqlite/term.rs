//! SQLite TermRepository implementation.

use sqlx::SqlitePool;

use super::helpers::{TERM_COLUMNS, is_unique_violation, map_sqlx_error, row_to_term};
use crate::db::utils::{current_timestamp, next_timestamp};
use crate::db::{DbError, DbResult, NewTerm, Term, TermPatch, TermRepository};

/// SQLx-backed term repository.
pub struct SqliteTermRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TermRepository for SqliteTermRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Term>> {
        let sql = format!("SELECT {} FROM term ORDER BY title ASC, id ASC", TERM_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(row_to_term)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }

    async fn find_by_keyword(&self, keyword: &str) -> DbResult<Option<Term>> {
        let sql = format!("SELECT {} FROM term WHERE keyword = ?", TERM_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(keyword)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref()
            .map(row_to_term)
            .transpose()
            .map_err(map_sqlx_error)
    }

    async fn get(&self, keyword: &str) -> DbResult<Term> {
        self.find_by_keyword(keyword)
            .await?
            .ok_or_else(|| DbError::term_not_found(keyword))
    }

    async fn create(&self, term: &NewTerm) -> DbResult<Term> {
        // created_at and updated_at start out identical
        let now = current_timestamp();

        let sql = format!(
            "INSERT INTO term (keyword, title, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {}",
            TERM_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&term.keyword)
            .bind(&term.title)
            .bind(&term.description)
            .bind(now)
            .bind(now)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DbError::term_exists(&term.keyword)
                } else {
                    map_sqlx_error(e)
                }
            })?;

        row_to_term(&row).map_err(map_sqlx_error)
    }

    async fn update(&self, keyword: &str, patch: &TermPatch) -> DbResult<Term> {
        // Write first so the transaction holds the write lock before it reads
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let sql = format!(
            "UPDATE term SET title = COALESCE(?, title), description = COALESCE(?, description) \
             WHERE keyword = ? RETURNING {}",
            TERM_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(patch.title.as_deref())
            .bind(patch.description.as_deref())
            .bind(keyword)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        // Dropping `tx` on any early return rolls it back
        let mut term = match row {
            Some(row) => row_to_term(&row).map_err(map_sqlx_error)?,
            None => return Err(DbError::term_not_found(keyword)),
        };

        term.updated_at = next_timestamp(term.updated_at);

        sqlx::query("UPDATE term SET updated_at = ? WHERE id = ?")
            .bind(term.updated_at)
            .bind(term.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(term)
    }

    async fn delete(&self, keyword: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM term WHERE keyword = ?")
            .bind(keyword)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::term_not_found(keyword));
        }

        Ok(())
    }

    async fn insert_missing(&self, terms: &[NewTerm]) -> DbResult<usize> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let mut inserted = 0;

        for term in terms {
            let now = current_timestamp();
            let result = sqlx::query(
                "INSERT INTO term (keyword, title, description, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?) ON CONFLICT(keyword) DO NOTHING",
            )
            .bind(&term.keyword)
            .bind(&term.title)
            .bind(&term.description)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            inserted += result.rows_affected() as usize;
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(inserted)
    }
}
