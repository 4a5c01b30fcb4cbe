/// Integration tests for the user and task stores
///
/// These tests run against an in-memory SQLite database, so no external
/// services are required. The pool is capped at a single connection because
/// each in-memory connection gets its own database.
///
/// Run with: cargo test --test store_tests
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tarefas_shared::db::schema::ensure_schema;
use tarefas_shared::models::tarefa::{CreateTarefa, Tarefa, UpdateTarefa};
use tarefas_shared::models::user::{CreateUser, User};

/// Helper to create a fresh in-memory database with the schema applied
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool should connect");

    ensure_schema(&pool).await.expect("schema should apply");
    pool
}

#[tokio::test]
async fn test_user_create_and_find() {
    let pool = test_pool().await;

    let user = User::create(
        &pool,
        CreateUser {
            username: "alice".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        },
    )
    .await
    .expect("user should be created");

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");

    let by_name = User::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("user should be found by username");
    assert_eq!(by_name.id, user.id);

    let by_id = User::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .expect("user should be found by id");
    assert_eq!(by_id.username, "alice");

    assert!(User::find_by_username(&pool, "bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_duplicate_username_rejected() {
    let pool = test_pool().await;

    let data = CreateUser {
        username: "alice".to_string(),
        password_hash: "hash1".to_string(),
    };
    User::create(&pool, data.clone()).await.expect("first create");

    let result = User::create(&pool, data).await;
    let err = result.expect_err("duplicate username should be rejected");

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected unique violation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_tarefa_create_then_get_roundtrip() {
    let pool = test_pool().await;

    let created = Tarefa::create(
        &pool,
        CreateTarefa {
            titulo: Some("buy milk".to_string()),
            descricao: None,
            ..Default::default()
        },
    )
    .await
    .expect("task should be created");

    assert_eq!(created.titulo.as_deref(), Some("buy milk"));
    assert_eq!(created.descricao, None);
    assert_eq!(created.status, "pendente");

    let fetched = Tarefa::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("task should exist");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_tarefa_list_insertion_order() {
    let pool = test_pool().await;

    for titulo in ["first", "second", "third"] {
        Tarefa::create(
            &pool,
            CreateTarefa {
                titulo: Some(titulo.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    let all = Tarefa::list(&pool).await.unwrap();
    let titles: Vec<&str> = all.iter().filter_map(|t| t.titulo.as_deref()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_tarefa_partial_update_changes_only_supplied_fields() {
    let pool = test_pool().await;

    let created = Tarefa::create(
        &pool,
        CreateTarefa {
            titulo: Some("write report".to_string()),
            descricao: Some("quarterly numbers".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = Tarefa::update(
        &pool,
        created.id,
        UpdateTarefa {
            status: Some("done".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("task should exist");

    assert_eq!(updated.status, "done");
    assert_eq!(updated.titulo.as_deref(), Some("write report"));
    assert_eq!(updated.descricao.as_deref(), Some("quarterly numbers"));
}

#[tokio::test]
async fn test_tarefa_update_clears_field_with_explicit_null() {
    let pool = test_pool().await;

    let created = Tarefa::create(
        &pool,
        CreateTarefa {
            titulo: Some("temp".to_string()),
            descricao: Some("keep me".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = Tarefa::update(
        &pool,
        created.id,
        UpdateTarefa {
            titulo: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("task should exist");

    assert_eq!(updated.titulo, None);
    assert_eq!(updated.descricao.as_deref(), Some("keep me"));
}

#[tokio::test]
async fn test_tarefa_empty_update_is_noop() {
    let pool = test_pool().await;

    let created = Tarefa::create(
        &pool,
        CreateTarefa {
            titulo: Some("unchanged".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = Tarefa::update(&pool, created.id, UpdateTarefa::default())
        .await
        .unwrap()
        .expect("task should exist");

    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_tarefa_update_unknown_id_returns_none() {
    let pool = test_pool().await;

    let result = Tarefa::update(
        &pool,
        9999,
        UpdateTarefa {
            status: Some("done".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_tarefa_delete_then_get_returns_none() {
    let pool = test_pool().await;

    let created = Tarefa::create(&pool, CreateTarefa::default()).await.unwrap();

    let deleted = Tarefa::delete(&pool, created.id).await.unwrap();
    assert!(deleted);

    assert!(Tarefa::find_by_id(&pool, created.id).await.unwrap().is_none());

    // Deleting again reports that nothing was removed
    assert!(!Tarefa::delete(&pool, created.id).await.unwrap());
}
