use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: String,
    /// Ids of the members this member follows.
    pub following: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn follows(&self, other: Uuid) -> bool {
        self.following.contains(&other)
    }
}

/// A member with the reverse side of the follow relation resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberProfile {
    #[serde(flatten)]
    pub member: Member,
    pub followers: Vec<Uuid>,
}
