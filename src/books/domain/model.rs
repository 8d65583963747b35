use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookKind, LibraryError, LibraryResult};
use crate::utils::date::serializer;

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "Title, author, ISBN are required for creating a book.";

// BookEntity is a single catalog record, either a printed book or an e-book.
// Records are immutable once created; replacing one means delete followed by add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    title: String,
    author: String,
    isbn: String,
    kind: BookKind,
    #[serde(with = "serializer")]
    created_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> LibraryResult<Self> {
        Self::build(title, author, isbn, BookKind::Book)
    }

    // The file format is kept as given; an e-book without one is still an e-book.
    pub fn ebook(title: &str, author: &str, isbn: &str, file_format: Option<&str>) -> LibraryResult<Self> {
        Self::build(title, author, isbn, BookKind::EBook { file_format: file_format.map(str::to_string) })
    }

    fn build(title: &str, author: &str, isbn: &str, kind: BookKind) -> LibraryResult<Self> {
        if title.is_empty() || author.is_empty() || isbn.is_empty() {
            return Err(LibraryError::validation(REQUIRED_FIELDS_MESSAGE, None));
        }
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            kind,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn isbn(&self) -> &str {
        &self.isbn
    }

    fn kind(&self) -> &BookKind {
        &self.kind
    }
}
