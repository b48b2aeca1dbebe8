use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    post::{entities::Post, ports::PostRepository},
};
use crate::infrastructure::memory::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryPostRepository {
    pub store: MemoryStore,
}

impl MemoryPostRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl PostRepository for MemoryPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, CoreError> {
        Ok(self.store.read().await.posts.clone())
    }

    async fn list_posts_by_authors(&self, author_ids: Vec<Uuid>) -> Result<Vec<Post>, CoreError> {
        let state = self.store.read().await;

        Ok(state
            .posts
            .iter()
            .filter(|post| author_ids.contains(&post.author))
            .cloned()
            .collect())
    }

    async fn get_post_by_id(&self, post_id: Uuid) -> Result<Option<Post>, CoreError> {
        let state = self.store.read().await;

        Ok(state.posts.iter().find(|post| post.id == post_id).cloned())
    }

    async fn create_post(&self, post: Post) -> Result<Post, CoreError> {
        let mut state = self.store.write().await;

        if !state.members.iter().any(|member| member.id == post.author) {
            return Err(CoreError::NotFound);
        }

        state.posts.push(post.clone());

        Ok(post)
    }

    async fn update_post(&self, post: Post) -> Result<Post, CoreError> {
        let mut state = self.store.write().await;

        let slot = state
            .posts
            .iter_mut()
            .find(|existing| existing.id == post.id)
            .ok_or(CoreError::NotFound)?;
        *slot = post.clone();

        Ok(post)
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<Option<Post>, CoreError> {
        let mut state = self.store.write().await;

        let Some(index) = state.posts.iter().position(|post| post.id == post_id) else {
            return Ok(None);
        };

        let deleted = state.posts.remove(index);
        state.comments.retain(|comment| comment.post != post_id);

        Ok(Some(deleted))
    }
}
