use std::sync::LazyLock;

use uuid::Uuid;

use super::{
    Field, FieldKind, FieldValue, FilterSpec, OrderKey, OrderSpec, QuerySchema, Queryable,
    SearchSpec,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TestBook {
    pub title: &'static str,
    pub year: i64,
    pub author_id: Uuid,
    pub author: &'static str,
}

const TITLE: Field<TestBook> = Field::new("title", FieldKind::Text, |book| {
    FieldValue::Text(book.title.to_string())
});
const YEAR: Field<TestBook> = Field::new("year", FieldKind::Integer, |book| {
    FieldValue::Integer(book.year)
});
const AUTHOR: Field<TestBook> = Field::new("author", FieldKind::Reference, |book| {
    FieldValue::reference(book.author_id, book.author)
});

static SCHEMA: LazyLock<QuerySchema<TestBook>> = LazyLock::new(|| QuerySchema {
    filter: FilterSpec::new()
        .exact("title", TITLE, "Exact title")
        .contains("title_contains", TITLE, "Title contains")
        .exact("author", AUTHOR, "Author id")
        .exact("year", YEAR, "Exact year")
        .gte("year_from", YEAR, "From year")
        .lte("year_to", YEAR, "Up to year"),
    search: SearchSpec::new(vec![TITLE, AUTHOR]),
    order: OrderSpec::new(vec![TITLE, YEAR, AUTHOR])
        .with_default(vec![OrderKey::desc(YEAR), OrderKey::asc(TITLE)]),
});

impl Queryable for TestBook {
    fn schema() -> &'static QuerySchema<Self> {
        &SCHEMA
    }
}

pub fn test_books() -> Vec<TestBook> {
    let author_a = Uuid::from_u128(1);
    let author_b = Uuid::from_u128(2);

    vec![
        TestBook {
            title: "Book Zero",
            year: 2019,
            author_id: author_a,
            author: "Author A",
        },
        TestBook {
            title: "Book One",
            year: 2020,
            author_id: author_a,
            author: "Author A",
        },
        TestBook {
            title: "Book Two",
            year: 2021,
            author_id: author_b,
            author: "Author B",
        },
        TestBook {
            title: "Harry Potter",
            year: 1997,
            author_id: Uuid::from_u128(3),
            author: "J.K. Rowling",
        },
        TestBook {
            title: "Dune",
            year: 1965,
            author_id: Uuid::from_u128(4),
            author: "Frank Herbert",
        },
    ]
}
