//! Tests for SqliteTermRepository.

use std::sync::Arc;

use crate::db::{Database, DbError, NewTerm, SqliteDatabase, TermPatch, TermRepository};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn visitor() -> NewTerm {
    NewTerm::new(
        "visitor",
        "Visitor Pattern",
        "Represents an operation to be performed on the elements of an object structure.",
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn term_create_and_get() {
    let db = setup_db().await;
    let terms = db.terms();

    let created = terms.create(&visitor()).await.expect("Create should succeed");
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let retrieved = terms.get("visitor").await.expect("Get should succeed");
    assert_eq!(retrieved, created);
    assert_eq!(retrieved.title, "Visitor Pattern");
}

#[tokio::test(flavor = "multi_thread")]
async fn term_get_nonexistent_returns_not_found() {
    let db = setup_db().await;

    let result = db.terms().get("nonexistent").await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));

    let found = db
        .terms()
        .find_by_keyword("nonexistent")
        .await
        .expect("Lookup should succeed");
    assert!(found.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn term_create_duplicate_keyword_returns_already_exists() {
    let db = setup_db().await;
    let terms = db.terms();

    let original = terms.create(&visitor()).await.expect("Create should succeed");

    let duplicate = NewTerm::new("visitor", "Something else", "Different text");
    let result = terms.create(&duplicate).await;
    match result {
        Err(DbError::AlreadyExists { key, .. }) => assert_eq!(key, "visitor"),
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }

    // Original row untouched
    let stored = terms.get("visitor").await.expect("Get should succeed");
    assert_eq!(stored, original);
    assert_eq!(terms.list().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn term_list_sorted_by_title() {
    let db = setup_db().await;
    let terms = db.terms();

    assert!(terms.list().await.expect("List should succeed").is_empty());

    for (keyword, title) in [("c", "Gamma"), ("a", "Alpha"), ("b", "Beta")] {
        terms
            .create(&NewTerm::new(keyword, title, "text"))
            .await
            .expect("Create should succeed");
    }

    let titles: Vec<String> = terms
        .list()
        .await
        .expect("List should succeed")
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);

    // Renaming moves the term to its new position
    terms
        .update(
            "a",
            &TermPatch {
                title: Some("Zeta".to_string()),
                description: None,
            },
        )
        .await
        .expect("Update should succeed");
    terms.delete("b").await.expect("Delete should succeed");

    let titles: Vec<String> = terms
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["Gamma", "Zeta"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn term_update_title_only_keeps_description() {
    let db = setup_db().await;
    let terms = db.terms();

    let original = terms.create(&visitor()).await.expect("Create should succeed");

    let updated = terms
        .update(
            "visitor",
            &TermPatch {
                title: Some("Visitor".to_string()),
                description: None,
            },
        )
        .await
        .expect("Update should succeed");

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "Visitor");
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    let stored = terms.get("visitor").await.expect("Get should succeed");
    assert_eq!(stored, updated);
}

#[tokio::test(flavor = "multi_thread")]
async fn term_update_description_only_keeps_title() {
    let db = setup_db().await;
    let terms = db.terms();

    terms.create(&visitor()).await.expect("Create should succeed");

    let updated = terms
        .update(
            "visitor",
            &TermPatch {
                title: None,
                description: Some("Double dispatch over a class hierarchy.".to_string()),
            },
        )
        .await
        .expect("Update should succeed");

    assert_eq!(updated.title, "Visitor Pattern");
    assert_eq!(updated.description, "Double dispatch over a class hierarchy.");
}

#[tokio::test(flavor = "multi_thread")]
async fn term_empty_patch_still_refreshes_updated_at() {
    let db = setup_db().await;
    let terms = db.terms();

    let original = terms.create(&visitor()).await.expect("Create should succeed");
    let first = terms
        .update("visitor", &TermPatch::default())
        .await
        .expect("Update should succeed");
    let second = terms
        .update("visitor", &TermPatch::default())
        .await
        .expect("Update should succeed");

    assert_eq!(first.title, original.title);
    assert!(first.updated_at > original.updated_at);
    assert!(second.updated_at > first.updated_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn term_update_nonexistent_returns_not_found() {
    let db = setup_db().await;

    let result = db
        .terms()
        .update(
            "missing",
            &TermPatch {
                title: Some("Anything".to_string()),
                description: None,
            },
        )
        .await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn term_delete_twice_returns_not_found() {
    let db = setup_db().await;
    let terms = db.terms();

    terms.create(&visitor()).await.expect("Create should succeed");
    terms.delete("visitor").await.expect("Delete should succeed");

    assert!(matches!(
        terms.get("visitor").await,
        Err(DbError::NotFound { .. })
    ));
    assert!(matches!(
        terms.delete("visitor").await,
        Err(DbError::NotFound { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn term_ids_not_reused_after_delete() {
    let db = setup_db().await;
    let terms = db.terms();

    let first = terms.create(&visitor()).await.expect("Create should succeed");
    terms.delete("visitor").await.expect("Delete should succeed");
    let second = terms.create(&visitor()).await.expect("Recreate should succeed");

    assert!(second.id > first.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_missing_is_idempotent() {
    let db = setup_db().await;
    let terms = db.terms();

    let catalogue = vec![
        NewTerm::new("ast", "AST", "Abstract syntax tree"),
        NewTerm::new("gnn", "GNN", "Graph neural networks"),
    ];

    let first = terms
        .insert_missing(&catalogue)
        .await
        .expect("First seed should succeed");
    let second = terms
        .insert_missing(&catalogue)
        .await
        .expect("Second seed should succeed");

    assert_eq!(first, 2);
    assert_eq!(second, 0);
    assert_eq!(terms.list().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_missing_keeps_existing_rows() {
    let db = setup_db().await;
    let terms = db.terms();

    terms
        .create(&NewTerm::new("ast", "My AST", "Edited by a user"))
        .await
        .expect("Create should succeed");

    let inserted = terms
        .insert_missing(&[
            NewTerm::new("ast", "AST", "Abstract syntax tree"),
            NewTerm::new("tsne", "t-SNE", "Dimensionality reduction"),
        ])
        .await
        .expect("Seed should succeed");

    assert_eq!(inserted, 1);
    let ast = terms.get("ast").await.unwrap();
    assert_eq!(ast.title, "My AST");
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_on_same_keyword_yield_one_row() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db = Arc::new(
        SqliteDatabase::open(dir.path().join("race.db"))
            .await
            .expect("Open should succeed"),
    );
    db.migrate().await.expect("Migration should succeed");

    let mut handles = Vec::new();
    for i in 0..8 {
        let db = Arc::clone(&db);
        handles.push(tokio::spawn(async move {
            db.terms()
                .create(&NewTerm::new("race", format!("Racer {}", i), "text"))
                .await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.expect("Task should not panic") {
            Ok(_) => created += 1,
            Err(DbError::AlreadyExists { .. }) => conflicts += 1,
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(db.terms().list().await.unwrap().len(), 1);
}
