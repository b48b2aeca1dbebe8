use std::collections::HashMap;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    author::{
        entities::{
            Author, AuthorDetail, AuthorOverview, AuthorStatistics, CatalogStatistics, YearRange,
        },
        ports::{AuthorRepository, AuthorService},
        value_objects::CreateAuthorInput,
    },
    book::{entities::Book, ports::BookRepository},
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    member::ports::MemberRepository,
    post::ports::PostRepository,
    query::{Page, QueryParams, SortParams, SortSpec, run_query, select},
};

const TOP_AUTHORS_LIMIT: usize = 5;

fn overviews(authors: &[Author], books: &[Book]) -> Vec<AuthorOverview> {
    let mut counts: HashMap<Uuid, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.author).or_default() += 1;
    }

    authors
        .iter()
        .map(|author| AuthorOverview::new(author, counts.get(&author.id).copied().unwrap_or(0)))
        .collect()
}

impl<A, B, C, M, P> Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    async fn author_overviews(&self) -> Result<(Vec<AuthorOverview>, Vec<Book>), CoreError> {
        let authors = self.author_repository.list_authors().await?;
        let books = self.book_repository.list_books().await?;

        Ok((overviews(&authors, &books), books))
    }
}

impl<A, B, C, M, P> AuthorService for Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    #[instrument(skip(self))]
    async fn list_authors(&self, params: QueryParams) -> Result<Page<AuthorOverview>, CoreError> {
        let (authors, _) = self.author_overviews().await?;

        Ok(run_query(authors, &params, &self.config.pagination))
    }

    #[instrument(skip(self))]
    async fn get_author(&self, author_id: Uuid) -> Result<AuthorDetail, CoreError> {
        let author = self
            .author_repository
            .get_author_by_id(author_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let books = self.book_repository.list_books_by_author(author.id).await?;
        let books = select(books, &QueryParams::new());

        Ok(AuthorDetail::new(author, books))
    }

    #[instrument(skip(self))]
    async fn create_author(&self, input: CreateAuthorInput) -> Result<Author, CoreError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("name is required".to_string()));
        }

        let author = self
            .author_repository
            .create_author(Author::new(name.to_string()))
            .await?;

        info!(author_id = %author.id, name = %author.name, "author created");

        Ok(author)
    }

    #[instrument(skip(self))]
    async fn author_statistics(&self) -> Result<AuthorStatistics, CoreError> {
        let (authors, books) = self.author_overviews().await?;
        let range = YearRange::from_years(books.iter().map(|book| book.publication_year));

        let statistics = CatalogStatistics {
            total_authors: authors.len(),
            total_books: books.len(),
            earliest_publication: range.map(|range| range.earliest),
            latest_publication: range.map(|range| range.latest),
        };

        let by_book_count = QueryParams {
            ordering: SortParams {
                sorts: vec![SortSpec::desc("book_count"), SortSpec::asc("name")],
            },
            ..QueryParams::default()
        };

        let mut top_authors = select(authors, &by_book_count);
        top_authors.truncate(TOP_AUTHORS_LIMIT);

        Ok(AuthorStatistics {
            statistics,
            top_authors,
        })
    }
}
