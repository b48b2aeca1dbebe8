use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    author::ports::AuthorRepository,
    book::{
        entities::{Book, BookDetail, BookSearchResult, validate_publication_year, validate_title},
        ports::{BookRepository, BookService},
        value_objects::{CreateBookInput, UpdateBookInput},
    },
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    member::ports::MemberRepository,
    post::ports::PostRepository,
    query::{Page, QueryParams, run_query, select},
};

/// Parameters honoured by the search endpoint, everything else is dropped.
const SEARCH_ENDPOINT_PARAMS: [&str; 3] = ["q", "min_year", "max_year"];
const RELATED_BOOKS_LIMIT: usize = 5;

impl<A, B, C, M, P> BookService for Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    #[instrument(skip(self))]
    async fn list_books(&self, params: QueryParams) -> Result<Page<Book>, CoreError> {
        let books = self.book_repository.list_books().await?;

        Ok(run_query(books, &params, &self.config.pagination))
    }

    #[instrument(skip(self))]
    async fn search_books(&self, params: QueryParams) -> Result<BookSearchResult, CoreError> {
        let query = params.get("q").unwrap_or_default().to_string();
        let params = QueryParams::from_pairs(
            SEARCH_ENDPOINT_PARAMS
                .iter()
                .filter_map(|key| params.get(key).map(|value| (*key, value))),
        );

        let books = self.book_repository.list_books().await?;
        let mut results = select(books, &params);
        results.truncate(self.config.effective_search_limit());

        Ok(BookSearchResult::new(query, results))
    }

    #[instrument(skip(self))]
    async fn get_book(&self, book_id: Uuid) -> Result<BookDetail, CoreError> {
        let book = self
            .book_repository
            .get_book_by_id(book_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let siblings = self
            .book_repository
            .list_books_by_author(book.author)
            .await?
            .into_iter()
            .filter(|other| other.id != book.id)
            .collect();

        let mut related_books = select(siblings, &QueryParams::new());
        related_books.truncate(RELATED_BOOKS_LIMIT);

        Ok(BookDetail {
            book,
            related_books,
        })
    }

    #[instrument(skip(self))]
    async fn create_book(&self, input: CreateBookInput) -> Result<Book, CoreError> {
        let title = validate_title(&input.title)?;
        validate_publication_year(input.publication_year)?;

        let author = self
            .author_repository
            .get_author_by_id(input.author_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let book = Book::new(title, input.publication_year, author.id, author.name);
        let created = self.book_repository.create_book(book).await?;

        info!(book_id = %created.id, title = %created.title, "book created");

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn update_book(&self, book_id: Uuid, input: UpdateBookInput) -> Result<Book, CoreError> {
        let mut book = self
            .book_repository
            .get_book_by_id(book_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(title) = input.title {
            book.title = validate_title(&title)?;
        }

        if let Some(year) = input.publication_year {
            validate_publication_year(year)?;
            book.publication_year = year;
        }

        if let Some(author_id) = input.author_id
            && author_id != book.author
        {
            let author = self
                .author_repository
                .get_author_by_id(author_id)
                .await?
                .ok_or(CoreError::NotFound)?;
            book.author = author.id;
            book.author_name = author.name;
        }

        let updated = self.book_repository.update_book(book).await?;

        info!(book_id = %updated.id, "book updated");

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_book(&self, book_id: Uuid) -> Result<Book, CoreError> {
        let deleted = self
            .book_repository
            .delete_book(book_id)
            .await?
            .ok_or_else(|| {
                warn!(%book_id, "attempt to delete a missing book");
                CoreError::NotFound
            })?;

        info!(book_id = %deleted.id, title = %deleted.title, "book deleted");

        Ok(deleted)
    }
}
