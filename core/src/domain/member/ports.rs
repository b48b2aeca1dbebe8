use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    member::entities::{Member, MemberProfile},
};

#[cfg_attr(test, mockall::automock)]
pub trait MemberService: Send + Sync {
    fn get_member(
        &self,
        member_id: Uuid,
    ) -> impl Future<Output = Result<MemberProfile, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MemberRepository: Send + Sync {
    fn list_members(&self) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn get_member_by_id(
        &self,
        member_id: Uuid,
    ) -> impl Future<Output = Result<Option<Member>, CoreError>> + Send;
}
