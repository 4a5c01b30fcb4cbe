/// Task CRUD endpoints
///
/// Five operations over the task store. Each is a single synchronous
/// request/response that commits before answering; when the auth gate is
/// enabled, none of these handlers run without a validated bearer token.
///
/// # Endpoints
///
/// - `GET /tarefas` - List all tasks (insertion order)
/// - `POST /tarefas` - Create a task
/// - `GET /tarefas/:id` - Fetch a task
/// - `PUT /tarefas/:id` - Partial update
/// - `DELETE /tarefas/:id` - Delete a task
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::auth::MessageResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tarefas_shared::models::tarefa::{CreateTarefa, Tarefa, UpdateTarefa};

/// Lists all tasks
///
/// ```text
/// GET /tarefas
/// ```
///
/// Returns every task in insertion order.
pub async fn list_tarefas(State(state): State<AppState>) -> ApiResult<Json<Vec<Tarefa>>> {
    let tarefas = Tarefa::list(&state.db).await?;
    Ok(Json(tarefas))
}

/// Creates a task
///
/// ```text
/// POST /tarefas
/// Content-Type: application/json
///
/// {"titulo": "buy milk"}
/// ```
///
/// All fields are optional; `status` defaults to `"pendente"`. Responds 201
/// with the created record including its assigned id.
pub async fn create_tarefa(
    State(state): State<AppState>,
    Json(req): Json<CreateTarefa>,
) -> ApiResult<(StatusCode, Json<Tarefa>)> {
    let tarefa = Tarefa::create(&state.db, req).await?;

    tracing::debug!(tarefa_id = tarefa.id, "Task created");

    Ok((StatusCode::CREATED, Json(tarefa)))
}

/// Fetches a single task
///
/// ```text
/// GET /tarefas/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no task with that id
pub async fn get_tarefa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Tarefa>> {
    let tarefa = Tarefa::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("tarefa não encontrada".to_string()))?;

    Ok(Json(tarefa))
}

/// Partially updates a task
///
/// ```text
/// PUT /tarefas/:id
/// Content-Type: application/json
///
/// {"status": "done"}
/// ```
///
/// Only the fields present in the body change; omitted fields keep their
/// prior value. Responds with the full updated record.
///
/// # Errors
///
/// - `404 Not Found`: no task with that id
pub async fn update_tarefa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTarefa>,
) -> ApiResult<Json<Tarefa>> {
    let tarefa = Tarefa::update(&state.db, id, req)
        .await?
        .ok_or_else(|| ApiError::NotFound("tarefa não encontrada".to_string()))?;

    tracing::debug!(tarefa_id = tarefa.id, "Task updated");

    Ok(Json(tarefa))
}

/// Deletes a task
///
/// ```text
/// DELETE /tarefas/:id
/// ```
///
/// Removal is permanent; nothing references a task, so there are no
/// cascading effects.
///
/// # Errors
///
/// - `404 Not Found`: no task with that id
pub async fn delete_tarefa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Tarefa::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("tarefa não encontrada".to_string()));
    }

    tracing::debug!(tarefa_id = id, "Task deleted");

    Ok(Json(MessageResponse {
        msg: "tarefa deletada com sucesso".to_string(),
    }))
}
