use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: EntityId,
    pub src: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GalleryImageCreate {
    pub src: String,
    #[serde(default)]
    pub caption: String,
}

impl Entity for GalleryImage {
    type Create = GalleryImageCreate;

    const KIND: EntityKind = EntityKind::Gallery;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assemble(id: EntityId, data: GalleryImageCreate, _: DateTime<Utc>) -> Self {
        GalleryImage {
            id,
            src: data.src,
            caption: data.caption,
        }
    }
}
