use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogService, EMPTY_CATALOG_MESSAGE};
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {
    #[serde(default)]
    pub search_q: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(search_q: Option<&str>) -> Self {
        Self {
            search_q: search_q.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        let message = if books.is_empty() { Some(EMPTY_CATALOG_MESSAGE.to_string()) } else { None };
        Self {
            books,
            message,
        }
    }
}

// Without a search term the whole catalog is listed and an empty catalog is not an error;
// with one, zero matches fail as not-found.
#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        match req.search_q.as_deref().filter(|q| !q.is_empty()) {
            Some(title) => {
                self.catalog_service.search_by_title(title).await
                    .map_err(CommandError::from).map(ListBooksCommandResponse::new)
            }
            None => {
                self.catalog_service.list_books().await
                    .map_err(CommandError::from).map(ListBooksCommandResponse::new)
            }
        }
    }
}
