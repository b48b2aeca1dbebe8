use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    member::{entities::Member, ports::MemberRepository},
};
use crate::infrastructure::memory::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryMemberRepository {
    pub store: MemoryStore,
}

impl MemoryMemberRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

impl MemberRepository for MemoryMemberRepository {
    async fn list_members(&self) -> Result<Vec<Member>, CoreError> {
        Ok(self.store.read().await.members.clone())
    }

    async fn get_member_by_id(&self, member_id: Uuid) -> Result<Option<Member>, CoreError> {
        let state = self.store.read().await;

        Ok(state
            .members
            .iter()
            .find(|member| member.id == member_id)
            .cloned())
    }
}
