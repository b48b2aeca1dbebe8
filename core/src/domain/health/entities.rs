use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Record counts of the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoreHealthStatus {
    pub status: String,
    pub authors: usize,
    pub books: usize,
    pub members: usize,
    pub posts: usize,
    pub comments: usize,
}
