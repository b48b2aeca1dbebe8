use uuid::Uuid;

use crate::domain::{
    comment::{
        entities::Comment,
        value_objects::{CreateCommentInput, UpdateCommentInput},
    },
    common::entities::app_errors::CoreError,
    query::{Page, QueryParams},
};

#[cfg_attr(test, mockall::automock)]
pub trait CommentService: Send + Sync {
    /// Comments under `post_id`. Unknown post → `CoreError::NotFound`.
    fn list_comments(
        &self,
        post_id: Uuid,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Comment>, CoreError>> + Send;

    fn get_comment(
        &self,
        comment_id: Uuid,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn create_comment(
        &self,
        post_id: Uuid,
        input: CreateCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn update_comment(
        &self,
        comment_id: Uuid,
        input: UpdateCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn delete_comment(
        &self,
        comment_id: Uuid,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CommentRepository: Send + Sync {
    fn list_comments(&self) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    fn list_comments_by_post(
        &self,
        post_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;

    fn get_comment_by_id(
        &self,
        comment_id: Uuid,
    ) -> impl Future<Output = Result<Option<Comment>, CoreError>> + Send;

    /// Fails with `CoreError::NotFound` when the post or the author is gone.
    fn create_comment(
        &self,
        comment: Comment,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn update_comment(
        &self,
        comment: Comment,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn delete_comment(
        &self,
        comment_id: Uuid,
    ) -> impl Future<Output = Result<Option<Comment>, CoreError>> + Send;
}
