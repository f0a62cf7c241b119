use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: EntityId,
    pub name: String,
    pub logo_url: String,
    #[serde(default)]
    pub website_url: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PartnerCreate {
    pub name: String,
    pub logo_url: String,
    #[serde(default)]
    pub website_url: String,
}

impl Entity for Partner {
    type Create = PartnerCreate;

    const KIND: EntityKind = EntityKind::Partners;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assemble(id: EntityId, data: PartnerCreate, _: DateTime<Utc>) -> Self {
        Partner {
            id,
            name: data.name,
            logo_url: data.logo_url,
            website_url: data.website_url,
        }
    }
}
