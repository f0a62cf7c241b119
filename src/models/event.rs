use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl Entity for Event {
    type Create = EventCreate;

    const KIND: EntityKind = EntityKind::Events;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assemble(id: EntityId, data: EventCreate, _: DateTime<Utc>) -> Self {
        let EventCreate {
            title,
            date,
            time,
            location,
            description,
            image_url,
        } = data;

        Event {
            id,
            title,
            date,
            time,
            location,
            description,
            image_url,
        }
    }
}
