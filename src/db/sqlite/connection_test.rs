//! Tests for SQLite database connection and migrations.

use crate::db::{Database, NewTerm, SqliteDatabase, TermRepository};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_term_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations tracks applied migrations; sqlite_sequence backs AUTOINCREMENT
    for table in ["_sqlx_migrations", "term", "sqlite_sequence"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.terms()
        .create(&NewTerm::new("ast", "AST", "Abstract syntax tree"))
        .await
        .expect("Create should succeed");
    db.migrate().await.expect("Second migration should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM term")
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed");
    assert_eq!(count, 1, "Re-running migrations must keep existing rows");
}

#[tokio::test(flavor = "multi_thread")]
async fn keyword_unique_constraint_enforced_by_schema() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let insert = "INSERT INTO term (keyword, title, description, created_at, updated_at) \
                  VALUES ('gnn', 'GNN', 'Graph neural networks', '2025-01-01T00:00:00Z', '2025-01-01T00:00:00Z')";

    sqlx::query(insert)
        .execute(db.pool())
        .await
        .expect("First insert should succeed");

    let err = sqlx::query(insert)
        .execute(db.pool())
        .await
        .expect_err("Second insert should violate the unique constraint");
    let db_err = err.as_database_error().expect("Expected a database error");
    assert!(db_err.is_unique_violation());
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("glossary.db");

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Open should create the file");
    db.migrate().await.expect("Migration should succeed");
    db.close().await;

    assert!(path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn data_survives_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("glossary.db");

    {
        let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
        db.migrate().await.expect("Migration should succeed");
        db.terms()
            .create(&NewTerm::new("tsne", "t-SNE", "Dimensionality reduction"))
            .await
            .expect("Create should succeed");
        db.close().await;
    }

    let db = SqliteDatabase::open(&path).await.expect("Reopen should succeed");
    db.migrate().await.expect("Migration should succeed");
    let term = db.terms().get("tsne").await.expect("Term should persist");
    assert_eq!(term.title, "t-SNE");
}
