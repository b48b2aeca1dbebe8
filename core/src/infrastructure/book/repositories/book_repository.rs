use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    book::{entities::Book, ports::BookRepository},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::memory::{MemoryStore, StoreState};

#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    pub store: MemoryStore,
}

impl MemoryBookRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

fn ensure_unique(state: &StoreState, book: &Book) -> Result<(), CoreError> {
    if state.books.iter().any(|existing| existing.same_edition(book)) {
        debug!(title = %book.title, year = book.publication_year, "duplicate book rejected");
        return Err(CoreError::Conflict(format!(
            "a book titled '{}' by this author published in {} already exists",
            book.title, book.publication_year
        )));
    }

    Ok(())
}

impl BookRepository for MemoryBookRepository {
    async fn list_books(&self) -> Result<Vec<Book>, CoreError> {
        Ok(self.store.read().await.books.clone())
    }

    async fn list_books_by_author(&self, author_id: Uuid) -> Result<Vec<Book>, CoreError> {
        let state = self.store.read().await;

        Ok(state
            .books
            .iter()
            .filter(|book| book.author == author_id)
            .cloned()
            .collect())
    }

    async fn get_book_by_id(&self, book_id: Uuid) -> Result<Option<Book>, CoreError> {
        let state = self.store.read().await;

        Ok(state.books.iter().find(|book| book.id == book_id).cloned())
    }

    async fn create_book(&self, book: Book) -> Result<Book, CoreError> {
        let mut state = self.store.write().await;

        if !state.authors.iter().any(|author| author.id == book.author) {
            return Err(CoreError::NotFound);
        }
        ensure_unique(&state, &book)?;

        state.books.push(book.clone());

        Ok(book)
    }

    async fn update_book(&self, book: Book) -> Result<Book, CoreError> {
        let mut state = self.store.write().await;

        ensure_unique(&state, &book)?;

        let slot = state
            .books
            .iter_mut()
            .find(|existing| existing.id == book.id)
            .ok_or(CoreError::NotFound)?;
        *slot = book.clone();

        Ok(book)
    }

    async fn delete_book(&self, book_id: Uuid) -> Result<Option<Book>, CoreError> {
        let mut state = self.store.write().await;

        let deleted = state
            .books
            .iter()
            .position(|book| book.id == book_id)
            .map(|index| state.books.remove(index));

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> MemoryBookRepository {
        MemoryBookRepository::new(MemoryStore::builtin().unwrap())
    }

    #[tokio::test]
    async fn test_update_rejects_collision_with_another_book() {
        let repository = repository().await;
        let books = repository.list_books().await.unwrap();
        let dune = books.iter().find(|book| book.title == "Dune").unwrap();
        let mut messiah = books
            .iter()
            .find(|book| book.title == "Dune Messiah")
            .unwrap()
            .clone();

        messiah.title = dune.title.clone();
        messiah.publication_year = dune.publication_year;

        assert!(matches!(
            repository.update_book(messiah).await,
            Err(CoreError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_update_of_itself_is_not_a_conflict() {
        let repository = repository().await;
        let dune = repository.list_books().await.unwrap().remove(0);

        assert_eq!(repository.update_book(dune.clone()).await, Ok(dune));
    }

    #[tokio::test]
    async fn test_create_for_missing_author_is_not_found() {
        let repository = repository().await;
        let book = Book::new("Nowhere".into(), 2001, Uuid::new_v4(), "Nobody".into());

        assert_eq!(repository.create_book(book).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_book_once() {
        let repository = repository().await;
        let first = repository.list_books().await.unwrap().remove(0);

        assert_eq!(repository.delete_book(first.id).await, Ok(Some(first.clone())));
        assert_eq!(repository.delete_book(first.id).await, Ok(None));
        assert_eq!(repository.get_book_by_id(first.id).await, Ok(None));
    }
}
