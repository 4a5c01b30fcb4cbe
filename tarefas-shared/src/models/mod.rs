/// Database models
///
/// This module contains the two persisted entities and their store
/// operations.
///
/// # Models
///
/// - `user`: User accounts (username + password hash); written only by
///   registration, read by login
/// - `tarefa`: Task records; the subject of the CRUD surface
///
/// # Example
///
/// ```no_run
/// use tarefas_shared::models::user::{CreateUser, User};
/// use tarefas_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     username: "alice".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```
pub mod tarefa;
pub mod user;
