use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde_json::Value;
use tracing::warn;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ServerError};

// Routes under /catalog plus the addBook/listBooks/deleteBook paths older clients call.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/catalog", post(add_book).get(list_books))
        .route("/catalog/:isbn", delete(remove_book))
        .route("/addBook/", post(add_book))
        .route("/listBooks/", get(list_books))
        .route("/deleteBook/:isbn", delete(remove_book))
        .with_state(state)
}

fn log_failure(operation: &str, err: ServerError) -> ServerError {
    warn!(operation, status = err.0.as_u16(), reason = err.1.as_str(), "catalog request failed");
    err
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req = AddBookCommandRequest::try_from(json.0)
        .map_err(|err| log_failure("add_book", CommandError::from(err).into()))?;
    let res = AddBookCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("add_book", err.into()))?;
    Ok(Json(res))
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("list_books", err.into()))?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let res = RemoveBookCommand::new(state.catalog).execute(req).await
        .map_err(|err| log_failure("remove_book", err.into()))?;
    Ok(Json(res))
}
