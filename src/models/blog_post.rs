use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlogPostCreate {
    pub title: String,
    pub author: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_url: String,
}

impl Entity for BlogPost {
    type Create = BlogPostCreate;

    const KIND: EntityKind = EntityKind::Blog;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assemble(id: EntityId, data: BlogPostCreate, _: DateTime<Utc>) -> Self {
        let BlogPostCreate {
            title,
            author,
            date,
            excerpt,
            content,
            image_url,
        } = data;

        BlogPost {
            id,
            title,
            author,
            date,
            excerpt,
            content,
            image_url,
        }
    }
}
