use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::EntityKind;

pub type EntityId = i64;

/// A record kept in one of the store's collections.
///
/// `Create` carries every caller-supplied field; the store fills in the id
/// (and, where the kind wants one, the insertion timestamp).
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Create: DeserializeOwned + Send + 'static;

    const KIND: EntityKind;

    fn id(&self) -> EntityId;

    fn assemble(id: EntityId, data: Self::Create, inserted_at: DateTime<Utc>) -> Self;
}
