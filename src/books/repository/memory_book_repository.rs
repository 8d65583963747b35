use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog as a process-local ordered list. Every operation
// holds the lock for its whole duration, so lookups and removals never interleave.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(vec![]),
        }
    }

    fn lock(&self) -> LibraryResult<MutexGuard<'_, Vec<BookEntity>>> {
        self.books.lock().map_err(|err| LibraryError::runtime(
            format!("book list lock poisoned {:?}", err).as_str(), None))
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: BookEntity) -> LibraryResult<usize> {
        let mut books = self.lock()?;
        books.push(entity);
        Ok(1)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.lock()?.clone())
    }

    async fn delete(&self, id: &str) -> LibraryResult<BookEntity> {
        let mut books = self.lock()?;
        match books.iter().position(|b| b.isbn() == id) {
            Some(index) => Ok(books.remove(index)),
            None => Err(LibraryError::not_found(format!("Book with ISBN {} not found.", id).as_str())),
        }
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.lock()?.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_title(&self, fragment: &str) -> LibraryResult<Vec<BookEntity>> {
        let books = self.lock()?;
        Ok(books.iter().filter(|b| b.title().contains(fragment)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    fn book(title: &str, isbn: &str) -> BookEntity {
        BookEntity::new(title, "author", isbn).expect("should build book")
    }

    #[tokio::test]
    async fn test_should_create_books_in_order() {
        let repo = MemoryBookRepository::new();
        for i in 0..5 {
            let _ = repo.create(book(format!("title {}", i).as_str(), i.to_string().as_str())).await.expect("should create book");
        }
        let all = repo.find_all().await.expect("should list books");
        let isbns: Vec<&str> = all.iter().map(|b| b.isbn()).collect();
        assert_eq!(vec!["0", "1", "2", "3", "4"], isbns);
        assert_eq!(5, repo.count().await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_delete_first_match_only() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(book("first", "dup")).await.expect("should create book");
        let _ = repo.create(book("middle", "other")).await.expect("should create book");
        let _ = repo.create(book("last", "dup")).await.expect("should create book");

        let removed = repo.delete("dup").await.expect("should delete book");
        assert_eq!("first", removed.title());

        let titles: Vec<String> = repo.find_all().await.expect("should list books")
            .iter().map(|b| b.title().to_string()).collect();
        assert_eq!(vec!["middle".to_string(), "last".to_string()], titles);
    }

    #[tokio::test]
    async fn test_should_match_isbn_exactly() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(book("title", "123456")).await.expect("should create book");
        let res = repo.delete("1234").await;
        assert_eq!(Err(LibraryError::not_found("Book with ISBN 1234 not found.")), res);
        assert_eq!(1, repo.count().await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_find_by_title_case_sensitive() {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(book("The Great Gatsby", "123456")).await.expect("should create book");
        let _ = repo.create(book("To Kill a Mockingbird", "789012")).await.expect("should create book");
        assert_eq!(1, repo.find_by_title("Mockingbird").await.expect("should search").len());
        assert_eq!(0, repo.find_by_title("mockingbird").await.expect("should search").len());
        assert_eq!(2, repo.find_by_title("T").await.expect("should search").len());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_serialize_concurrent_mutations() {
        let repo = Arc::new(MemoryBookRepository::new());
        let mut handles = vec![];
        for i in 0..50 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(book("title", i.to_string().as_str())).await
            }));
        }
        for handle in handles {
            let _ = handle.await.expect("task should finish").expect("should create book");
        }
        assert_eq!(50, repo.count().await.expect("should count"));

        let mut handles = vec![];
        for i in 0..50 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.delete(i.to_string().as_str()).await
            }));
        }
        for handle in handles {
            let _ = handle.await.expect("task should finish").expect("should delete book");
        }
        assert_eq!(0, repo.count().await.expect("should count"));
    }
}
