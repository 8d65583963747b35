use tracing::info;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;

fn log_books(heading: &str, books: &[BookDto]) {
    info!("{}", heading);
    for line in books.iter().flat_map(|b| b.describe()) {
        info!("{}", line);
    }
}

// Walks the catalog through add, list, search and delete before the server starts. The
// catalog is left holding "To Kill a Mockingbird" only.
pub async fn seed_demo(catalog: &dyn CatalogService) -> LibraryResult<()> {
    let _ = catalog.add_book(&BookDto::new("The Great Gatsby", "F. Scott Fitzgerald", "123456")).await?;
    let _ = catalog.add_book(&BookDto::new("To Kill a Mockingbird", "Harper Lee", "789012")).await?;

    log_books("All Books:", &catalog.list_books().await?);
    log_books("Books with \"Mockingbird\" in the title:", &catalog.search_by_title("Mockingbird").await?);

    catalog.remove_book("123456").await?;

    let ebook = BookDto::ebook("Harry Potter", "J.K. Rowling", "567890", Some("PDF"));
    log_books("E-book:", &[ebook]);
    Ok(())
}
