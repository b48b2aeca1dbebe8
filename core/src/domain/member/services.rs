use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    author::ports::AuthorRepository,
    book::ports::BookRepository,
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    member::{
        entities::MemberProfile,
        ports::{MemberRepository, MemberService},
    },
    post::ports::PostRepository,
};

impl<A, B, C, M, P> MemberService for Service<A, B, C, M, P>
where
    A: AuthorRepository,
    B: BookRepository,
    C: CommentRepository,
    M: MemberRepository,
    P: PostRepository,
{
    #[instrument(skip(self))]
    async fn get_member(&self, member_id: Uuid) -> Result<MemberProfile, CoreError> {
        let members = self.member_repository.list_members().await?;

        let followers = members
            .iter()
            .filter(|member| member.follows(member_id))
            .map(|member| member.id)
            .collect();

        let member = members
            .into_iter()
            .find(|member| member.id == member_id)
            .ok_or(CoreError::NotFound)?;

        Ok(MemberProfile { member, followers })
    }
}
