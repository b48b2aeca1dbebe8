use std::sync::Arc;

use crate::domain::{
    author::ports::AuthorRepository, book::ports::BookRepository,
    comment::ports::CommentRepository, common::LibrisConfig, member::ports::MemberRepository,
    post::ports::PostRepository,
};

pub struct Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    pub(crate) author_repository: Arc<A>,
    pub(crate) book_repository: Arc<B>,
    pub(crate) comment_repository: Arc<C>,
    pub(crate) member_repository: Arc<M>,
    pub(crate) post_repository: Arc<P>,
    pub(crate) config: LibrisConfig,
}

impl<A, B, C, M, P> Clone for Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    fn clone(&self) -> Self {
        Self {
            author_repository: Arc::clone(&self.author_repository),
            book_repository: Arc::clone(&self.book_repository),
            comment_repository: Arc::clone(&self.comment_repository),
            member_repository: Arc::clone(&self.member_repository),
            post_repository: Arc::clone(&self.post_repository),
            config: self.config.clone(),
        }
    }
}

impl<A, B, C, M, P> Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    pub fn new(
        author_repository: A,
        book_repository: B,
        comment_repository: C,
        member_repository: M,
        post_repository: P,
        config: LibrisConfig,
    ) -> Self {
        Self {
            author_repository: Arc::new(author_repository),
            book_repository: Arc::new(book_repository),
            comment_repository: Arc::new(comment_repository),
            member_repository: Arc::new(member_repository),
            post_repository: Arc::new(post_repository),
            config,
        }
    }

    pub fn config(&self) -> &LibrisConfig {
        &self.config
    }
}
