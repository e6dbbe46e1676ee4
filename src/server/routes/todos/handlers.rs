use crate::error::{StoreOp, TogoError};
use crate::server::router::TogoState;
use axum::{Json, extract::State, http::StatusCode};
use togo_schema::{CreateTodoInput, Todo, UpdateTodoInput};

use super::extract::{JsonBody, TodoId, ensure_title};

/// GET /todos
pub async fn list_todos(State(state): State<TogoState>) -> Result<Json<Vec<Todo>>, TogoError> {
    let todos = state
        .store
        .list()
        .await
        .map_err(TogoError::store(StoreOp::List))?;
    Ok(Json(todos))
}

/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<TogoState>,
    TodoId(id): TodoId,
) -> Result<Json<Todo>, TogoError> {
    let todo = state
        .store
        .get_by_id(id)
        .await
        .map_err(TogoError::store(StoreOp::Get))?;
    Ok(Json(todo))
}

/// POST /todos/new
pub async fn create_todo(
    State(state): State<TogoState>,
    JsonBody(input): JsonBody<CreateTodoInput>,
) -> Result<(StatusCode, Json<Todo>), TogoError> {
    ensure_title(&input.title)?;

    let todo = state
        .store
        .create(input)
        .await
        .map_err(TogoError::store(StoreOp::Create))?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
///
/// A missing id surfaces as 500, same as any other store failure.
pub async fn update_todo(
    State(state): State<TogoState>,
    TodoId(id): TodoId,
    JsonBody(input): JsonBody<UpdateTodoInput>,
) -> Result<Json<Todo>, TogoError> {
    if let Some(title) = input.title.as_deref() {
        ensure_title(title)?;
    }

    let todo = state
        .store
        .update(id, input)
        .await
        .map_err(TogoError::store(StoreOp::Update))?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<TogoState>,
    TodoId(id): TodoId,
) -> Result<StatusCode, TogoError> {
    state
        .store
        .delete(id)
        .await
        .map_err(TogoError::store(StoreOp::Delete))?;
    Ok(StatusCode::NO_CONTENT)
}
