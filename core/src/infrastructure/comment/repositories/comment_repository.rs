use uuid::Uuid;

use crate::domain::{
    comment::{entities::Comment, ports::CommentRepository},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::memory::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryCommentRepository {
    pub store: MemoryStore,
}

impl MemoryCommentRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl CommentRepository for MemoryCommentRepository {
    async fn list_comments(&self) -> Result<Vec<Comment>, CoreError> {
        Ok(self.store.read().await.comments.clone())
    }

    async fn list_comments_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, CoreError> {
        let state = self.store.read().await;

        Ok(state
            .comments
            .iter()
            .filter(|comment| comment.post == post_id)
            .cloned()
            .collect())
    }

    async fn get_comment_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CoreError> {
        let state = self.store.read().await;

        Ok(state
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .cloned())
    }

    async fn create_comment(&self, comment: Comment) -> Result<Comment, CoreError> {
        let mut state = self.store.write().await;

        if !state.posts.iter().any(|post| post.id == comment.post)
            || !state.members.iter().any(|member| member.id == comment.author)
        {
            return Err(CoreError::NotFound);
        }

        state.comments.push(comment.clone());

        Ok(comment)
    }

    async fn update_comment(&self, comment: Comment) -> Result<Comment, CoreError> {
        let mut state = self.store.write().await;

        let slot = state
            .comments
            .iter_mut()
            .find(|existing| existing.id == comment.id)
            .ok_or(CoreError::NotFound)?;
        *slot = comment.clone();

        Ok(comment)
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, CoreError> {
        let mut state = self.store.write().await;

        let deleted = state
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .map(|index| state.comments.remove(index));

        Ok(deleted)
    }
}
