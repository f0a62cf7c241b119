use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceCreate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: String,
}

impl Entity for Resource {
    type Create = ResourceCreate;

    const KIND: EntityKind = EntityKind::Resources;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assemble(id: EntityId, data: ResourceCreate, _: DateTime<Utc>) -> Self {
        let ResourceCreate {
            title,
            description,
            category,
            url,
        } = data;

        Resource {
            id,
            title,
            description,
            category,
            url,
        }
    }
}
