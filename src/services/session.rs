use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// In-memory admin sessions keyed by an opaque cookie token.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SystemTime>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh session token
    pub fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.lock().insert(token.clone(), SystemTime::now());
        token
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.is_active_at(token, SystemTime::now())
    }

    fn is_active_at(&self, token: &str, now: SystemTime) -> bool {
        let mut sessions = self.lock();

        // Drop everything past its lifetime
        sessions.retain(|_, issued| {
            now.duration_since(*issued).unwrap_or(Duration::from_secs(0)) < self.ttl
        });

        sessions.contains_key(token)
    }

    pub fn revoke(&self, token: &str) {
        self.lock().remove(token);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SystemTime>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(24 * 60 * 60))
    }
}
