use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    query::{
        Field, FieldKind, FieldValue, FilterSpec, OrderKey, OrderSpec, QuerySchema, Queryable,
        SearchSpec,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Member id of the author.
    pub author: Uuid,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: String, content: String, author: Uuid, author_username: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            title,
            content,
            author,
            author_username,
            created_at: now,
            updated_at: now,
        }
    }
}

const TITLE: Field<Post> = Field::new("title", FieldKind::Text, |post| {
    FieldValue::Text(post.title.clone())
});
const CONTENT: Field<Post> = Field::new("content", FieldKind::Text, |post| {
    FieldValue::Text(post.content.clone())
});
const AUTHOR: Field<Post> = Field::new("author", FieldKind::Reference, |post| {
    FieldValue::reference(post.author, post.author_username.clone())
});
const AUTHOR_USERNAME: Field<Post> = Field::new("author_username", FieldKind::Text, |post| {
    FieldValue::Text(post.author_username.clone())
});
const CREATED_AT: Field<Post> = Field::new("created_at", FieldKind::Timestamp, |post| {
    FieldValue::Timestamp(post.created_at)
});

static POST_SCHEMA: LazyLock<QuerySchema<Post>> = LazyLock::new(|| QuerySchema {
    filter: FilterSpec::new()
        .exact("author", AUTHOR, "Author member id")
        .contains("author_username", AUTHOR_USERNAME, "Author username contains")
        .gte("created_after", CREATED_AT, "Created at or after (RFC 3339 or YYYY-MM-DD)")
        .lte("created_before", CREATED_AT, "Created at or before (RFC 3339 or YYYY-MM-DD)"),
    search: SearchSpec::new(vec![TITLE, CONTENT]),
    order: OrderSpec::new(vec![CREATED_AT, TITLE, AUTHOR_USERNAME])
        .with_default(vec![OrderKey::desc(CREATED_AT)]),
});

impl Queryable for Post {
    fn schema() -> &'static QuerySchema<Self> {
        &POST_SCHEMA
    }
}
