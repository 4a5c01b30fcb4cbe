/// Startup schema bootstrap
///
/// The schema is created automatically at startup if absent. Both statements
/// are `CREATE TABLE IF NOT EXISTS`, so running them against an existing
/// database is a no-op and the server can restart against the same file.
///
/// # Tables
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL UNIQUE,
///     password_hash TEXT NOT NULL
/// );
///
/// CREATE TABLE IF NOT EXISTS tarefas (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     titulo TEXT,
///     descricao TEXT,
///     status TEXT NOT NULL DEFAULT 'pendente'
/// );
/// ```
///
/// Tasks carry no foreign key to users: authentication gates access but does
/// not scope ownership.
use sqlx::SqlitePool;
use tracing::info;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
)
"#;

const CREATE_TAREFAS: &str = r#"
CREATE TABLE IF NOT EXISTS tarefas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    titulo TEXT,
    descricao TEXT,
    status TEXT NOT NULL DEFAULT 'pendente'
)
"#;

/// Creates the `users` and `tarefas` tables when they do not exist yet.
///
/// # Errors
///
/// Returns an error if either DDL statement fails to execute.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_TAREFAS).execute(pool).await?;

    info!("Database schema is up to date");
    Ok(())
}
