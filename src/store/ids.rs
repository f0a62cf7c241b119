use std::sync::Arc;

use crate::models::EntityId;

use super::Clock;

/// Hands out identifiers for newly added records.
pub trait IdSource: Send + Sync {
    fn next_id(&mut self) -> EntityId;

    /// Guarantees every later id is strictly greater than `id`.
    fn advance_past(&mut self, id: EntityId);
}

/// Millisecond timestamps, bumped by one whenever the clock has not moved
/// past the previously issued id. Saturates at `EntityId::MAX`.
pub struct ClockIds {
    clock: Arc<dyn Clock>,
    last: EntityId,
}

impl ClockIds {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, last: 0 }
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> EntityId {
        let now = self.clock.now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    fn advance_past(&mut self, id: EntityId) {
        self.last = self.last.max(id);
    }
}

/// Plain counter. Saturates at `EntityId::MAX`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: EntityId,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl SequentialIds {
    pub fn starting_at(first: EntityId) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next = id.saturating_add(1);
        id
    }

    fn advance_past(&mut self, id: EntityId) {
        self.next = self.next.max(id.saturating_add(1));
    }
}
