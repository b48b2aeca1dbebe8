use crate::domain::{
    author::ports::AuthorRepository,
    book::ports::BookRepository,
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::StoreHealthStatus, ports::HealthCheckService},
    member::ports::MemberRepository,
    post::ports::PostRepository,
};

impl<A, B, C, M, P> HealthCheckService for Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    async fn readness(&self) -> Result<StoreHealthStatus, CoreError> {
        Ok(StoreHealthStatus {
            status: "ok".to_string(),
            authors: self.author_repository.list_authors().await?.len(),
            books: self.book_repository.list_books().await?.len(),
            members: self.member_repository.list_members().await?.len(),
            posts: self.post_repository.list_posts().await?.len(),
            comments: self.comment_repository.list_comments().await?.len(),
        })
    }
}
