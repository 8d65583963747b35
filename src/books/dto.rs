use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookKind;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(flatten)]
    pub kind: BookKind,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        Self::build(title, author, isbn, BookKind::Book)
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, file_format: Option<&str>) -> BookDto {
        Self::build(title, author, isbn, BookKind::EBook { file_format: file_format.map(str::to_string) })
    }

    fn build(title: &str, author: &str, isbn: &str, kind: BookKind) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            kind,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
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

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;
    use crate::core::library::BookKind;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("title", "author", "isbn");
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!(BookKind::Book, book.kind);
    }

    #[tokio::test]
    async fn test_should_serialize_ebook_with_kind_tag() {
        let book = BookDto::ebook("Harry Potter", "J.K. Rowling", "567890", Some("PDF"));
        let val = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(json!("EBook"), val["kind"]);
        assert_eq!(json!("PDF"), val["file_format"]);
        assert_eq!(json!("567890"), val["isbn"]);

        let loaded: BookDto = serde_json::from_value(val).expect("should deserialize");
        assert_eq!(book.kind, loaded.kind);
        assert_eq!(book.describe(), loaded.describe());
    }
}
