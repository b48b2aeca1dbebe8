use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    author::{entities::Author, ports::AuthorRepository},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::memory::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryAuthorRepository {
    pub store: MemoryStore,
}

impl MemoryAuthorRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl AuthorRepository for MemoryAuthorRepository {
    async fn list_authors(&self) -> Result<Vec<Author>, CoreError> {
        Ok(self.store.read().await.authors.clone())
    }

    async fn get_author_by_id(&self, author_id: Uuid) -> Result<Option<Author>, CoreError> {
        let state = self.store.read().await;

        Ok(state
            .authors
            .iter()
            .find(|author| author.id == author_id)
            .cloned())
    }

    async fn create_author(&self, author: Author) -> Result<Author, CoreError> {
        let mut state = self.store.write().await;

        if state.authors.iter().any(|existing| existing.id == author.id) {
            debug!(author_id = %author.id, "author id already taken");
            return Err(CoreError::Conflict("author already exists".to_string()));
        }

        state.authors.push(author.clone());

        Ok(author)
    }
}
