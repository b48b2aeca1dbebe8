use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    author::ports::AuthorRepository,
    book::ports::BookRepository,
    comment::{
        entities::Comment,
        ports::{CommentRepository, CommentService},
        value_objects::{CreateCommentInput, UpdateCommentInput},
    },
    common::{entities::app_errors::CoreError, required, services::Service},
    member::ports::MemberRepository,
    post::ports::PostRepository,
    query::{Page, QueryParams, run_query},
};

impl<A, B, C, M, P> CommentService for Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    #[instrument(skip(self))]
    async fn list_comments(
        &self,
        post_id: Uuid,
        params: QueryParams,
    ) -> Result<Page<Comment>, CoreError> {
        if self.post_repository.get_post_by_id(post_id).await?.is_none() {
            return Err(CoreError::NotFound);
        }

        let comments = self.comment_repository.list_comments_by_post(post_id).await?;

        Ok(run_query(comments, &params, &self.config.pagination))
    }

    #[instrument(skip(self))]
    async fn get_comment(&self, comment_id: Uuid) -> Result<Comment, CoreError> {
        self.comment_repository
            .get_comment_by_id(comment_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(author_id = %input.author_id))]
    async fn create_comment(
        &self,
        post_id: Uuid,
        input: CreateCommentInput,
    ) -> Result<Comment, CoreError> {
        let content = required(&input.content, "content")?;

        let author = self
            .member_repository
            .get_member_by_id(input.author_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let comment = self
            .comment_repository
            .create_comment(Comment::new(post_id, author.id, author.username, content))
            .await?;

        info!(comment_id = %comment.id, %post_id, "comment created");

        Ok(comment)
    }

    #[instrument(skip(self, input))]
    async fn update_comment(
        &self,
        comment_id: Uuid,
        input: UpdateCommentInput,
    ) -> Result<Comment, CoreError> {
        let content = required(&input.content, "content")?;

        let mut comment = self
            .comment_repository
            .get_comment_by_id(comment_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        comment.content = content;
        comment.updated_at = Utc::now();

        self.comment_repository.update_comment(comment).await
    }

    #[instrument(skip(self))]
    async fn delete_comment(&self, comment_id: Uuid) -> Result<Comment, CoreError> {
        let deleted = self
            .comment_repository
            .delete_comment(comment_id)
            .await?
            .ok_or_else(|| {
                warn!(%comment_id, "attempt to delete a missing comment");
                CoreError::NotFound
            })?;

        info!(%comment_id, "comment deleted");

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_service;
    use crate::domain::{
        author::ports::MockAuthorRepository, book::ports::MockBookRepository,
        comment::ports::MockCommentRepository, common::LibrisConfig,
        member::ports::MockMemberRepository,
        post::ports::{MockPostRepository, PostService},
    };
    use crate::infrastructure::memory::fixtures::{ALICE_ID, BOB_ID, CAROL_ID};

    async fn post_id(title: &str) -> Uuid {
        test_service()
            .list_posts(QueryParams::from_pairs([("search", title)]))
            .await
            .unwrap()
            .items[0]
            .id
    }

    #[tokio::test]
    async fn test_comments_of_a_post_newest_first() {
        let service = test_service();
        let rust_tips = post_id("Rust tips").await;

        let page = service
            .list_comments(rust_tips, QueryParams::new())
            .await
            .unwrap();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.items[0].author_username, "carol");
        assert_eq!(page.items[1].author_username, "alice");
        assert!(page.items.iter().all(|comment| comment.post == rust_tips));
    }

    #[tokio::test]
    async fn test_comment_filters_and_search() {
        let service = test_service();
        let rust_tips = post_id("Rust tips").await;

        let by_alice = service
            .list_comments(
                rust_tips,
                QueryParams::from_pairs([("author", ALICE_ID.to_string())]),
            )
            .await
            .unwrap();
        assert_eq!(by_alice.total_count, 1);

        let searched = service
            .list_comments(rust_tips, QueryParams::from_pairs([("search", "ITERATOR")]))
            .await
            .unwrap();
        assert_eq!(searched.total_count, 1);
        assert_eq!(searched.items[0].author, CAROL_ID);

        let paged = service
            .list_comments(
                rust_tips,
                QueryParams::from_pairs([("page_size", "1"), ("ordering", "author_username")]),
            )
            .await
            .unwrap();
        assert_eq!(paged.items[0].author_username, "alice");
        assert!(paged.has_next);
    }

    #[tokio::test]
    async fn test_comments_of_unknown_post_is_not_found() {
        assert_eq!(
            test_service()
                .list_comments(Uuid::new_v4(), QueryParams::new())
                .await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let service = test_service();
        let rust_tips = post_id("Rust tips").await;

        let comment = service
            .create_comment(
                rust_tips,
                CreateCommentInput {
                    author_id: BOB_ID,
                    content: "  Thanks both!  ".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(comment.content, "Thanks both!");
        assert_eq!(comment.author_username, "bob");

        let updated = service
            .update_comment(
                comment.id,
                UpdateCommentInput {
                    content: "Thanks everyone!".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.content, "Thanks everyone!");
        assert!(updated.updated_at >= comment.created_at);
        assert_eq!(service.get_comment(comment.id).await.unwrap(), updated);

        assert_eq!(service.delete_comment(comment.id).await.unwrap().id, comment.id);
        assert_eq!(
            service.delete_comment(comment.id).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_invalid_comments_are_rejected() {
        let service = test_service();
        let rust_tips = post_id("Rust tips").await;

        let blank = service
            .create_comment(
                rust_tips,
                CreateCommentInput {
                    author_id: ALICE_ID,
                    content: " ".to_string(),
                },
            )
            .await;
        assert!(matches!(blank, Err(CoreError::Validation(_))));

        let stranger = service
            .create_comment(
                rust_tips,
                CreateCommentInput {
                    author_id: Uuid::new_v4(),
                    content: "Hi".to_string(),
                },
            )
            .await;
        assert_eq!(stranger, Err(CoreError::NotFound));

        let orphan = service
            .create_comment(
                Uuid::new_v4(),
                CreateCommentInput {
                    author_id: ALICE_ID,
                    content: "Hi".to_string(),
                },
            )
            .await;
        assert_eq!(orphan, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_blank_update_never_reaches_repository() {
        let mut comment_repository = MockCommentRepository::new();
        comment_repository.expect_get_comment_by_id().never();
        comment_repository.expect_update_comment().never();

        let service = Service::new(
            MockAuthorRepository::new(),
            MockBookRepository::new(),
            comment_repository,
            MockMemberRepository::new(),
            MockPostRepository::new(),
            LibrisConfig::default(),
        );

        let result = service
            .update_comment(
                Uuid::new_v4(),
                UpdateCommentInput {
                    content: String::new(),
                },
            )
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}
