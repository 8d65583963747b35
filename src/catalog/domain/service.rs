use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, EMPTY_CATALOG_MESSAGE};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{BookKind, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    metadata: HashMap<String, String>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            book_repository,
            events_publisher,
        }
    }

    // The catalog has already changed by the time an event goes out, so a failed publish is
    // logged rather than returned.
    async fn publish(&self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event).await {
            warn!(event_id = event.event_id.as_str(), key = event.key.as_str(), error = %err,
                "failed to publish domain event");
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::try_from(book)?;
        let added = BookDto::from(&entity);
        let event = DomainEvent::added("books", added.id().as_str(), &self.metadata, &added)?;
        let _ = self.book_repository.create(entity).await?;
        self.publish(&event).await;
        Ok(added)
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        if books.is_empty() {
            info!("{}", EMPTY_CATALOG_MESSAGE);
        }
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        if title.is_empty() {
            return Err(LibraryError::validation("Title is required for searching books.", None));
        }
        let books = self.book_repository.find_by_title(title).await?;
        if books.is_empty() {
            return Err(LibraryError::not_found(
                format!("No books found with title containing '{}'.", title).as_str()));
        }
        debug!(title, matches = books.len(), "searched catalog");
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        if isbn.is_empty() {
            return Err(LibraryError::validation("ISBN is required for deleting a book.", None));
        }
        let event = DomainEvent::deleted("books", isbn, &self.metadata, &isbn.to_string())?;
        let _ = self.book_repository.delete(isbn).await?;
        info!("Book with ISBN {} deleted successfully.", isbn);
        self.publish(&event).await;
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title().to_string(),
            author: other.author().to_string(),
            isbn: other.isbn().to_string(),
            kind: other.kind().clone(),
            created_at: other.created_at(),
        }
    }
}

impl TryFrom<&BookDto> for BookEntity {
    type Error = LibraryError;

    fn try_from(other: &BookDto) -> Result<Self, Self::Error> {
        match &other.kind {
            BookKind::Book => {
                BookEntity::new(&other.title, &other.author, &other.isbn)
            }
            BookKind::EBook { file_format } => {
                BookEntity::ebook(&other.title, &other.author, &other.isbn, file_format.as_deref())
            }
        }
    }
}
