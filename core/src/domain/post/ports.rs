use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    post::{
        entities::Post,
        value_objects::{CreatePostInput, UpdatePostInput},
    },
    query::{Page, QueryParams},
};

#[cfg_attr(test, mockall::automock)]
pub trait PostService: Send + Sync {
    fn list_posts(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Post>, CoreError>> + Send;

    fn get_post(&self, post_id: Uuid) -> impl Future<Output = Result<Post, CoreError>> + Send;

    fn create_post(
        &self,
        input: CreatePostInput,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    fn update_post(
        &self,
        post_id: Uuid,
        input: UpdatePostInput,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Removes the post together with its comments.
    fn delete_post(&self, post_id: Uuid) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Posts written by the members `member_id` follows.
    fn get_feed(
        &self,
        member_id: Uuid,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Post>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PostRepository: Send + Sync {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, CoreError>> + Send;

    fn list_posts_by_authors(
        &self,
        author_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Post>, CoreError>> + Send;

    fn get_post_by_id(
        &self,
        post_id: Uuid,
    ) -> impl Future<Output = Result<Option<Post>, CoreError>> + Send;

    fn create_post(&self, post: Post) -> impl Future<Output = Result<Post, CoreError>> + Send;

    fn update_post(&self, post: Post) -> impl Future<Output = Result<Post, CoreError>> + Send;

    /// Also drops the comments of the removed post.
    fn delete_post(
        &self,
        post_id: Uuid,
    ) -> impl Future<Output = Result<Option<Post>, CoreError>> + Send;
}
