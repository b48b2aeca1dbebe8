use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCommentInput {
    pub author_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCommentInput {
    pub content: String,
}
