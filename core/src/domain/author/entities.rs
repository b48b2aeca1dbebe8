use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    book::entities::Book,
    common::generate_timestamp,
    query::{
        Field, FieldKind, FieldValue, FilterSpec, OrderKey, OrderSpec, QuerySchema, Queryable,
        SearchSpec,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Author {
    pub fn new(name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            created_at: now,
        }
    }
}

/// Listing shape of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorOverview {
    pub id: Uuid,
    pub name: String,
    pub book_count: usize,
}

impl AuthorOverview {
    pub fn new(author: &Author, book_count: usize) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            book_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct YearRange {
    pub earliest: i32,
    pub latest: i32,
}

impl YearRange {
    /// `None` for an empty iterator.
    pub fn from_years(years: impl IntoIterator<Item = i32>) -> Option<Self> {
        years.into_iter().fold(None, |range, year| match range {
            None => Some(Self {
                earliest: year,
                latest: year,
            }),
            Some(Self { earliest, latest }) => Some(Self {
                earliest: earliest.min(year),
                latest: latest.max(year),
            }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDetail {
    pub id: Uuid,
    pub name: String,
    pub books: Vec<Book>,
    pub book_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year_range: Option<YearRange>,
}

impl AuthorDetail {
    pub fn new(author: Author, books: Vec<Book>) -> Self {
        let publication_year_range =
            YearRange::from_years(books.iter().map(|book| book.publication_year));

        Self {
            id: author.id,
            name: author.name,
            book_count: books.len(),
            books,
            publication_year_range,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogStatistics {
    pub total_authors: usize,
    pub total_books: usize,
    pub earliest_publication: Option<i32>,
    pub latest_publication: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorStatistics {
    pub statistics: CatalogStatistics,
    pub top_authors: Vec<AuthorOverview>,
}

const NAME: Field<AuthorOverview> = Field::new("name", FieldKind::Text, |author| {
    FieldValue::Text(author.name.clone())
});
const BOOK_COUNT: Field<AuthorOverview> = Field::new("book_count", FieldKind::Integer, |author| {
    FieldValue::Integer(i64::try_from(author.book_count).unwrap_or(i64::MAX))
});

static AUTHOR_SCHEMA: LazyLock<QuerySchema<AuthorOverview>> = LazyLock::new(|| QuerySchema {
    filter: FilterSpec::new()
        .exact("name", NAME, "Exact author name")
        .contains("name_contains", NAME, "Author name contains (case insensitive)")
        .gte("min_books", BOOK_COUNT, "Authors with at least this many books"),
    search: SearchSpec::new(vec![NAME]),
    order: OrderSpec::new(vec![NAME, BOOK_COUNT]).with_default(vec![OrderKey::asc(NAME)]),
});

impl Queryable for AuthorOverview {
    fn schema() -> &'static QuerySchema<Self> {
        &AUTHOR_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_spans_books() {
        assert_eq!(YearRange::from_years([]), None);
        assert_eq!(
            YearRange::from_years([1976, 1965, 1969]),
            Some(YearRange {
                earliest: 1965,
                latest: 1976
            })
        );
    }

    #[test]
    fn test_detail_without_books_omits_range() {
        let detail = AuthorDetail::new(Author::new("Iain M. Banks".into()), Vec::new());
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["book_count"], 0);
        assert!(json.get("publication_year_range").is_none());
    }
}
