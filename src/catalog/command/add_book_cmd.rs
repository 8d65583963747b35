use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const BOOK_ADDED_MESSAGE: &str = "Book added successfully.";

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Fields are optional so that a missing one is reported as a validation failure of the book
// rather than as a malformed request.
#[derive(Debug, Default, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "ISBN")]
    pub isbn: Option<String>,
    #[serde(default, alias = "fileFormat")]
    pub file_format: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, file_format: Option<&str>) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            isbn: Some(isbn.to_string()),
            file_format: file_format.map(str::to_string),
        }
    }

    // An e-book is built only when a non-empty file format is supplied.
    pub fn build_book(&self) -> BookDto {
        let title = self.title.as_deref().unwrap_or_default();
        let author = self.author.as_deref().unwrap_or_default();
        let isbn = self.isbn.as_deref().unwrap_or_default();
        match self.file_format.as_deref().filter(|f| !f.is_empty()) {
            Some(file_format) => BookDto::ebook(title, author, isbn, Some(file_format)),
            None => BookDto::new(title, author, isbn),
        }
    }
}

impl TryFrom<Value> for AddBookCommandRequest {
    type Error = LibraryError;

    fn try_from(value: Value) -> LibraryResult<Self> {
        if !value.is_object() {
            return Err(LibraryError::invalid_type("Invalid book object. Must be an instance of Book."));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: BOOK_ADDED_MESSAGE.to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use serde_json::json;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::{BookKind, LibraryError};

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"));
                AddBookCommand::new(Arc::from(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("test book", "author", "isbn", None))
            .await.expect("should add book");
        assert_eq!("Book added successfully.", res.message.as_str());
        assert_eq!(BookKind::Book, res.book.kind);
    }

    #[tokio::test]
    async fn test_should_run_add_ebook() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("Harry Potter", "J.K. Rowling", "567890", Some("PDF")))
            .await.expect("should add ebook");
        assert_eq!(Some("PDF"), res.book.kind.file_format());
    }

    #[tokio::test]
    async fn test_should_treat_empty_format_as_book() {
        let req = AddBookCommandRequest::new("title", "author", "isbn", Some(""));
        assert_eq!(BookKind::Book, req.build_book().kind);
    }

    #[tokio::test]
    async fn test_should_fail_add_book_without_author() {
        let cmd = SUT_CMD.get().await;

        let req = AddBookCommandRequest::try_from(json!({"title": "title", "ISBN": "isbn"})).expect("should parse request");
        let res = cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_parse_original_field_names() {
        let req = AddBookCommandRequest::try_from(json!({
            "title": "Harry Potter", "author": "J.K. Rowling", "ISBN": "567890", "fileFormat": "EPUB"}))
            .expect("should parse request");
        assert_eq!(Some("567890"), req.isbn.as_deref());
        assert_eq!(Some("EPUB"), req.build_book().kind.file_format());
    }

    #[tokio::test]
    async fn test_should_reject_non_object_request() {
        for value in [json!(["title"]), json!("title"), json!(42), json!(null)] {
            let res = AddBookCommandRequest::try_from(value);
            assert!(matches!(res, Err(LibraryError::InvalidType { .. })));
        }
    }

    #[tokio::test]
    async fn test_should_reject_mistyped_fields() {
        let res = AddBookCommandRequest::try_from(json!({"title": 7, "author": "a", "isbn": "i"}));
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }
}
