use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    author::ports::AuthorRepository,
    book::ports::BookRepository,
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, required, services::Service},
    member::ports::MemberRepository,
    post::{
        entities::Post,
        ports::{PostRepository, PostService},
        value_objects::{CreatePostInput, UpdatePostInput},
    },
    query::{Page, QueryParams, run_query},
};

impl<A, B, C, M, P> PostService for Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    #[instrument(skip(self))]
    async fn list_posts(&self, params: QueryParams) -> Result<Page<Post>, CoreError> {
        let posts = self.post_repository.list_posts().await?;

        Ok(run_query(posts, &params, &self.config.pagination))
    }

    #[instrument(skip(self))]
    async fn get_post(&self, post_id: Uuid) -> Result<Post, CoreError> {
        self.post_repository
            .get_post_by_id(post_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(author_id = %input.author_id))]
    async fn create_post(&self, input: CreatePostInput) -> Result<Post, CoreError> {
        let title = required(&input.title, "title")?;
        let content = required(&input.content, "content")?;

        let author = self
            .member_repository
            .get_member_by_id(input.author_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let post = self
            .post_repository
            .create_post(Post::new(title, content, author.id, author.username))
            .await?;

        info!(post_id = %post.id, "post created");

        Ok(post)
    }

    #[instrument(skip(self, input))]
    async fn update_post(&self, post_id: Uuid, input: UpdatePostInput) -> Result<Post, CoreError> {
        let title = input
            .title
            .as_deref()
            .map(|title| required(title, "title"))
            .transpose()?;
        let content = input
            .content
            .as_deref()
            .map(|content| required(content, "content"))
            .transpose()?;

        let mut post = self
            .post_repository
            .get_post_by_id(post_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(title) = title {
            post.title = title;
        }
        if let Some(content) = content {
            post.content = content;
        }
        post.updated_at = Utc::now();

        let updated = self.post_repository.update_post(post).await?;

        info!(%post_id, "post updated");

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, post_id: Uuid) -> Result<Post, CoreError> {
        let deleted = self
            .post_repository
            .delete_post(post_id)
            .await?
            .ok_or_else(|| {
                warn!(%post_id, "attempt to delete a missing post");
                CoreError::NotFound
            })?;

        info!(%post_id, "post deleted");

        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn get_feed(
        &self,
        member_id: Uuid,
        params: QueryParams,
    ) -> Result<Page<Post>, CoreError> {
        let member = self
            .member_repository
            .get_member_by_id(member_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let posts = if member.following.is_empty() {
            Vec::new()
        } else {
            self.post_repository
                .list_posts_by_authors(member.following)
                .await?
        };

        Ok(run_query(posts, &params, &self.config.pagination))
    }
}
