pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub(crate) const EMPTY_CATALOG_MESSAGE: &str = "No books available in the library.";

#[async_trait]
pub trait CatalogService: Sync + Send {
    // validates the book and appends it; duplicate isbns are accepted
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;

    // all books in insertion order, empty when the catalog has none
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;

    // books whose title contains the fragment; fails with not-found when nothing matches
    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;

    // removes the first book with exactly this isbn
    async fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
}
