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

/// A member's reply under a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    /// Id of the post this comment belongs to.
    pub post: Uuid,
    /// Member id of the author.
    pub author: Uuid,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post: Uuid, author: Uuid, author_username: String, content: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            post,
            author,
            author_username,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

const CONTENT: Field<Comment> = Field::new("content", FieldKind::Text, |comment| {
    FieldValue::Text(comment.content.clone())
});
const AUTHOR: Field<Comment> = Field::new("author", FieldKind::Reference, |comment| {
    FieldValue::reference(comment.author, comment.author_username.clone())
});
const AUTHOR_USERNAME: Field<Comment> =
    Field::new("author_username", FieldKind::Text, |comment| {
        FieldValue::Text(comment.author_username.clone())
    });
const CREATED_AT: Field<Comment> = Field::new("created_at", FieldKind::Timestamp, |comment| {
    FieldValue::Timestamp(comment.created_at)
});

static COMMENT_SCHEMA: LazyLock<QuerySchema<Comment>> = LazyLock::new(|| QuerySchema {
    filter: FilterSpec::new()
        .exact("author", AUTHOR, "Author member id")
        .contains("author_username", AUTHOR_USERNAME, "Author username contains")
        .gte("created_after", CREATED_AT, "Created at or after (RFC 3339 or YYYY-MM-DD)")
        .lte("created_before", CREATED_AT, "Created at or before (RFC 3339 or YYYY-MM-DD)"),
    search: SearchSpec::new(vec![CONTENT]),
    order: OrderSpec::new(vec![CREATED_AT, AUTHOR_USERNAME])
        .with_default(vec![OrderKey::desc(CREATED_AT)]),
});

impl Queryable for Comment {
    fn schema() -> &'static QuerySchema<Self> {
        &COMMENT_SCHEMA
    }
}
