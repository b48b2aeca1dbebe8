use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
}

/// Partial update, `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}
