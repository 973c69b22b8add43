//! HTTP routing for the todo API.
//!
//! | Method | Path          | Success                    |
//! |--------|---------------|----------------------------|
//! | GET    | `/todos`      | 200, array of todos        |
//! | POST   | `/todos`      | 201, created todo          |
//! | GET    | `/todos/{id}` | 200, one todo              |
//! | PUT    | `/todos/{id}` | 200, the whole collection  |
//! | DELETE | `/todos/{id}` | 200, empty body            |
//!
//! A missing todo, an unknown path, an id segment that is not an integer, and
//! an unsupported method on a known path all answer 404 with an empty body.
//! Request bodies have no size limit.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, DefaultBodyLimit, Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::error::StoreError;
use crate::model::{Todo, TodoInput};
use crate::store::TodoStore;

pub type SharedStore = Arc<TodoStore>;

type RawId = Result<Path<String>, PathRejection>;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).fallback(not_found),
        )
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .delete(delete_todo)
                .fallback(not_found),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(store)
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn create_todo(
    State(store): State<SharedStore>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), StoreError> {
    let todo = store.create(TodoInput::from_request(&headers, &body)).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(store): State<SharedStore>,
    raw_id: RawId,
) -> Result<Json<Todo>, StoreError> {
    let id = path_id(raw_id)?;
    store.get(id).await.map(Json)
}

async fn update_todo(
    State(store): State<SharedStore>,
    raw_id: RawId,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Vec<Todo>>, StoreError> {
    let id = path_id(raw_id)?;
    store
        .update(id, TodoInput::from_request(&headers, &body))
        .await
        .map(Json)
}

async fn delete_todo(
    State(store): State<SharedStore>,
    raw_id: RawId,
) -> Result<StatusCode, StoreError> {
    let id = path_id(raw_id)?;
    store.delete(id).await.map(|()| StatusCode::OK)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// An id segment that does not decode, or has no leading integer, addresses
/// no todo.
fn path_id(raw_id: RawId) -> Result<i64, StoreError> {
    let Path(raw) = raw_id.map_err(|rejection| {
        debug!(%rejection, "path id did not decode");
        StoreError::NotFound
    })?;
    parse_id(&raw).ok_or_else(|| {
        debug!(raw, "path id is not an integer");
        StoreError::NotFound
    })
}

/// Parse the leading integer of a path segment.
///
/// Leading whitespace and one sign are skipped, then the longest run of digits
/// is taken, so `"12abc"` is 12. A `0x`/`0X` prefix reads hex digits. Returns
/// `None` when there are no digits or the value does not fit in `i64`.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
