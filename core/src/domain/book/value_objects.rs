use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateBookInput {
    pub title: String,
    pub publication_year: i32,
    pub author_id: Uuid,
}

/// Partial update, `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookInput {
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub author_id: Option<Uuid>,
}
