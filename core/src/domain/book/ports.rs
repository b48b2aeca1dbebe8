use uuid::Uuid;

use crate::domain::{
    book::{
        entities::{Book, BookDetail, BookSearchResult},
        value_objects::{CreateBookInput, UpdateBookInput},
    },
    common::entities::app_errors::CoreError,
    query::{Page, QueryParams},
};

#[cfg_attr(test, mockall::automock)]
pub trait BookService: Send + Sync {
    fn list_books(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Book>, CoreError>> + Send;

    fn search_books(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<BookSearchResult, CoreError>> + Send;

    fn get_book(&self, book_id: Uuid)
    -> impl Future<Output = Result<BookDetail, CoreError>> + Send;

    fn create_book(
        &self,
        input: CreateBookInput,
    ) -> impl Future<Output = Result<Book, CoreError>> + Send;

    fn update_book(
        &self,
        book_id: Uuid,
        input: UpdateBookInput,
    ) -> impl Future<Output = Result<Book, CoreError>> + Send;

    fn delete_book(&self, book_id: Uuid) -> impl Future<Output = Result<Book, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait BookRepository: Send + Sync {
    fn list_books(&self) -> impl Future<Output = Result<Vec<Book>, CoreError>> + Send;

    fn list_books_by_author(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Book>, CoreError>> + Send;

    fn get_book_by_id(
        &self,
        book_id: Uuid,
    ) -> impl Future<Output = Result<Option<Book>, CoreError>> + Send;

    /// Fails with `CoreError::Conflict` when the same edition already exists.
    fn create_book(&self, book: Book) -> impl Future<Output = Result<Book, CoreError>> + Send;

    fn update_book(&self, book: Book) -> impl Future<Output = Result<Book, CoreError>> + Send;

    fn delete_book(
        &self,
        book_id: Uuid,
    ) -> impl Future<Output = Result<Option<Book>, CoreError>> + Send;
}
