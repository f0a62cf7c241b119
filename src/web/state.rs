use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use orgpress::models::AdminUser;
use orgpress::services::SessionStore;
use orgpress::store::EntityStore;

pub struct AppState {
    store: RwLock<EntityStore>,
    admin: Mutex<AdminUser>,
    pub sessions: SessionStore,
}

// A panicking handler must not lock the site out, so poisoned locks are
// taken over as-is.
impl AppState {
    pub fn new(store: EntityStore, admin: AdminUser, sessions: SessionStore) -> Self {
        Self {
            store: RwLock::new(store),
            admin: Mutex::new(admin),
            sessions,
        }
    }

    pub fn store(&self) -> RwLockReadGuard<'_, EntityStore> {
        self.store
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn store_mut(&self) -> RwLockWriteGuard<'_, EntityStore> {
        self.store
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn admin(&self) -> MutexGuard<'_, AdminUser> {
        self.admin
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
