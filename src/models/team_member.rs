use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberCreate {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
}

impl Entity for TeamMember {
    type Create = TeamMemberCreate;

    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assemble(id: EntityId, data: TeamMemberCreate, _: DateTime<Utc>) -> Self {
        let TeamMemberCreate {
            name,
            role,
            bio,
            image_url,
        } = data;

        TeamMember {
            id,
            name,
            role,
            bio,
            image_url,
        }
    }
}
