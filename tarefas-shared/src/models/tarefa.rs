/// Task ("tarefa") model and store operations
///
/// Tasks are the single CRUD resource of the service. A task has no formal
/// lifecycle: `status` is a free-form string with no validated transitions,
/// defaulting to `"pendente"` at creation and overwritten verbatim on update.
/// Tasks carry no owner; authentication gates access but does not scope
/// records to accounts.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tarefas (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     titulo TEXT,
///     descricao TEXT,
///     status TEXT NOT NULL DEFAULT 'pendente'
/// );
/// ```
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Default status for newly created tasks
pub const DEFAULT_STATUS: &str = "pendente";

/// Task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tarefa {
    /// Unique task id (auto-assigned)
    pub id: i64,

    /// Title, may be absent
    pub titulo: Option<String>,

    /// Description, may be absent
    pub descricao: Option<String>,

    /// Free-form status string
    pub status: String,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTarefa {
    /// Title
    pub titulo: Option<String>,

    /// Description
    pub descricao: Option<String>,

    /// Status (defaults to "pendente" when not supplied)
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl Default for CreateTarefa {
    fn default() -> Self {
        Self {
            titulo: None,
            descricao: None,
            status: default_status(),
        }
    }
}

/// Input for partially updating a task
///
/// Each field is independently present-or-absent: an omitted field keeps its
/// prior value. For the nullable columns the outer `Option` is presence and
/// the inner `Option` is the new value, so `"titulo": null` clears the title
/// while leaving `titulo` out keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTarefa {
    /// New title (use Some(None) to clear)
    #[serde(
        default,
        deserialize_with = "present_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub titulo: Option<Option<String>>,

    /// New description (use Some(None) to clear)
    #[serde(
        default,
        deserialize_with = "present_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub descricao: Option<Option<String>>,

    /// New status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Wraps the inner value so a field that appears in the payload always
/// yields the outer `Some`, keeping explicit null distinct from absent.
fn present_or_absent<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateTarefa {
    /// Whether the payload carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.titulo.is_none() && self.descricao.is_none() && self.status.is_none()
    }
}

impl Tarefa {
    /// Creates a new task and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(pool: &SqlitePool, data: CreateTarefa) -> Result<Self, sqlx::Error> {
        let tarefa = sqlx::query_as::<_, Tarefa>(
            r#"
            INSERT INTO tarefas (titulo, descricao, status)
            VALUES (?, ?, ?)
            RETURNING id, titulo, descricao, status
            "#,
        )
        .bind(data.titulo)
        .bind(data.descricao)
        .bind(data.status)
        .fetch_one(pool)
        .await?;

        Ok(tarefa)
    }

    /// Finds a task by id.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let tarefa = sqlx::query_as::<_, Tarefa>(
            r#"
            SELECT id, titulo, descricao, status
            FROM tarefas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(tarefa)
    }

    /// Lists all tasks in insertion order (ascending id).
    ///
    /// The ordering is part of the contract: repeated listings return tasks
    /// in the order they were created.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tarefas = sqlx::query_as::<_, Tarefa>(
            r#"
            SELECT id, titulo, descricao, status
            FROM tarefas
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tarefas)
    }

    /// Partially updates a task.
    ///
    /// Only fields present in `data` are written; omitted fields keep their
    /// prior value. An empty payload is a no-op that returns the current
    /// record.
    ///
    /// # Returns
    ///
    /// The full updated task, or `None` if no task with that id exists.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateTarefa,
    ) -> Result<Option<Self>, sqlx::Error> {
        if data.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        // Build the SET clause from the fields actually present
        let mut sets = Vec::new();
        if data.titulo.is_some() {
            sets.push("titulo = ?");
        }
        if data.descricao.is_some() {
            sets.push("descricao = ?");
        }
        if data.status.is_some() {
            sets.push("status = ?");
        }

        let query = format!(
            "UPDATE tarefas SET {} WHERE id = ? RETURNING id, titulo, descricao, status",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, Tarefa>(&query);

        if let Some(titulo) = data.titulo {
            q = q.bind(titulo);
        }
        if let Some(descricao) = data.descricao {
            q = q.bind(descricao);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }

        let tarefa = q.bind(id).fetch_optional(pool).await?;

        Ok(tarefa)
    }

    /// Deletes a task permanently.
    ///
    /// No soft delete and no cascading effects: nothing references a task.
    ///
    /// # Returns
    ///
    /// True if a task was deleted, false if the id was unknown.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tarefas WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tarefa_default_status() {
        let data: CreateTarefa = serde_json::from_str(r#"{"titulo": "buy milk"}"#).unwrap();
        assert_eq!(data.titulo.as_deref(), Some("buy milk"));
        assert_eq!(data.descricao, None);
        assert_eq!(data.status, "pendente");
    }

    #[test]
    fn test_create_tarefa_explicit_status() {
        let data: CreateTarefa = serde_json::from_str(r#"{"status": "feita"}"#).unwrap();
        assert_eq!(data.status, "feita");
    }

    #[test]
    fn test_update_tarefa_absent_vs_null() {
        // Absent field: outer None
        let absent: UpdateTarefa = serde_json::from_str(r#"{"status": "done"}"#).unwrap();
        assert!(absent.titulo.is_none());
        assert_eq!(absent.status.as_deref(), Some("done"));

        // Explicit null: present, clearing the value
        let cleared: UpdateTarefa = serde_json::from_str(r#"{"titulo": null}"#).unwrap();
        assert_eq!(cleared.titulo, Some(None));
        assert!(cleared.status.is_none());
    }

    #[test]
    fn test_update_tarefa_is_empty() {
        let empty: UpdateTarefa = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());

        let not_empty: UpdateTarefa = serde_json::from_str(r#"{"descricao": "x"}"#).unwrap();
        assert!(!not_empty.is_empty());
    }

    // Store operations are covered in tests/store_tests.rs against an
    // in-memory database.
}
