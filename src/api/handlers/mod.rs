use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};

use super::error::ApiError;
use super::extract::{JsonOrDefault, ValidJson};
use super::response::*;
use crate::models::*;
use crate::service::TodoService;

/// Path ids that are not unsigned integers never match a stored todo. The whole
/// segment must be digits: partial numeric prefixes such as `12abc` or `1.5` are
/// rejected rather than read as `12` or `1`.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NoRoute {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

// ============================================================
// Todos
// ============================================================

pub async fn list_todos(State(todos): State<TodoService>) -> Result<Json<ListResponse>, ApiError> {
    let data = todos.list().await?;
    Ok(Json(ListResponse::new(data)))
}

pub async fn get_todo(
    State(todos): State<TodoService>,
    Path(raw_id): Path<String>,
) -> Result<Json<DataResponse<Todo>>, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::not_found(raw_id, "get"));
    };

    todos
        .get(id)
        .await?
        .map(|todo| Json(DataResponse::new(todo)))
        .ok_or_else(|| ApiError::not_found(id, "get"))
}

pub async fn create_todo(
    State(todos): State<TodoService>,
    ValidJson(input): ValidJson<CreateTodoInput>,
) -> Result<(StatusCode, Json<DataResponse<Todo>>), ApiError> {
    input.validate()?;

    let todo = todos.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(todo, "Todo created successfully")),
    ))
}

pub async fn update_todo(
    State(todos): State<TodoService>,
    Path(raw_id): Path<String>,
    body: Result<JsonOrDefault<UpdateTodoInput>, ApiError>,
) -> Result<Json<DataResponse<Todo>>, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::not_found(raw_id, "update"));
    };

    // A missing todo is reported before a malformed body.
    let input = match body {
        Ok(JsonOrDefault(input)) => input,
        Err(rejection) => {
            if todos.get(id).await?.is_none() {
                return Err(ApiError::not_found(id, "update"));
            }
            return Err(rejection);
        }
    };

    todos
        .update(id, input)
        .await?
        .map(|todo| Json(DataResponse::with_message(todo, "Todo updated successfully")))
        .ok_or_else(|| ApiError::not_found(id, "update"))
}

pub async fn delete_todo(
    State(todos): State<TodoService>,
    Path(raw_id): Path<String>,
) -> Result<Json<DataResponse<DeletedTodo>>, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::not_found(raw_id, "delete"));
    };

    if todos.delete(id).await? {
        Ok(Json(DataResponse::with_message(
            DeletedTodo { id },
            "Todo deleted successfully",
        )))
    } else {
        Err(ApiError::not_found(id, "delete"))
    }
}
