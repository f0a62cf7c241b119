use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

/// A membership application sent through the public site.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MembershipSubmission {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub membership_type: String,
    #[serde(default)]
    pub message: String,
    /// Set by the store when the submission is inserted.
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MembershipSubmissionCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub membership_type: String,
    #[serde(default)]
    pub message: String,
}

impl Entity for MembershipSubmission {
    type Create = MembershipSubmissionCreate;

    const KIND: EntityKind = EntityKind::Submissions;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assemble(
        id: EntityId,
        data: MembershipSubmissionCreate,
        inserted_at: DateTime<Utc>,
    ) -> Self {
        let MembershipSubmissionCreate {
            name,
            email,
            phone,
            membership_type,
            message,
        } = data;

        MembershipSubmission {
            id,
            name,
            email,
            phone,
            membership_type,
            message,
            date: inserted_at,
        }
    }
}
