use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    query::{
        Field, FieldKind, FieldValue, FilterSpec, OrderKey, OrderSpec, QuerySchema, Queryable,
        SearchSpec,
    },
};

pub const MIN_PUBLICATION_YEAR: i32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub publication_year: i32,
    /// Author id.
    pub author: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Book {
    pub fn new(title: String, publication_year: i32, author: Uuid, author_name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            title,
            publication_year,
            author,
            author_name,
            created_at: now,
        }
    }

    /// Books are unique on title, author and publication year.
    pub fn same_edition(&self, other: &Book) -> bool {
        self.id != other.id
            && self.title == other.title
            && self.author == other.author
            && self.publication_year == other.publication_year
    }
}

pub fn validate_publication_year(year: i32) -> Result<(), CoreError> {
    let current_year = Utc::now().year();

    if year > current_year {
        return Err(CoreError::Validation(format!(
            "Publication year cannot be in the future. Current year is {current_year}, but got {year}."
        )));
    }

    if year < MIN_PUBLICATION_YEAR {
        return Err(CoreError::Validation(format!(
            "Publication year must be a valid year (minimum {MIN_PUBLICATION_YEAR})."
        )));
    }

    Ok(())
}

pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("title is required".to_string()));
    }

    Ok(title.to_string())
}

/// A book together with up to five other books by the same author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookDetail {
    #[serde(flatten)]
    pub book: Book,
    pub related_books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookSearchResult {
    pub query: String,
    pub results_count: usize,
    pub results: Vec<Book>,
}

impl BookSearchResult {
    pub fn new(query: String, results: Vec<Book>) -> Self {
        Self {
            query,
            results_count: results.len(),
            results,
        }
    }
}

const TITLE: Field<Book> = Field::new("title", FieldKind::Text, |book| {
    FieldValue::Text(book.title.clone())
});
const PUBLICATION_YEAR: Field<Book> =
    Field::new("publication_year", FieldKind::Integer, |book| {
        FieldValue::Integer(i64::from(book.publication_year))
    });
const AUTHOR: Field<Book> = Field::new("author", FieldKind::Reference, |book| {
    FieldValue::reference(book.author, book.author_name.clone())
});
const AUTHOR_NAME: Field<Book> = Field::new("author_name", FieldKind::Text, |book| {
    FieldValue::Text(book.author_name.clone())
});

static BOOK_SCHEMA: LazyLock<QuerySchema<Book>> = LazyLock::new(|| QuerySchema {
    filter: FilterSpec::new()
        .exact("title", TITLE, "Exact title match")
        .contains("title_contains", TITLE, "Title contains (case insensitive)")
        .exact("author", AUTHOR, "Author id")
        .contains("author_name", AUTHOR_NAME, "Author name contains (case insensitive)")
        .exact("publication_year", PUBLICATION_YEAR, "Exact publication year")
        .gte("year_from", PUBLICATION_YEAR, "Published in or after this year")
        .gte("min_year", PUBLICATION_YEAR, "Published in or after this year")
        .lte("year_to", PUBLICATION_YEAR, "Published in or before this year")
        .lte("max_year", PUBLICATION_YEAR, "Published in or before this year"),
    search: SearchSpec::new(vec![TITLE, AUTHOR_NAME]),
    order: OrderSpec::new(vec![PUBLICATION_YEAR, TITLE, AUTHOR_NAME])
        .with_default(vec![OrderKey::desc(PUBLICATION_YEAR), OrderKey::asc(TITLE)]),
});

impl Queryable for Book {
    fn schema() -> &'static QuerySchema<Self> {
        &BOOK_SCHEMA
    }
}
