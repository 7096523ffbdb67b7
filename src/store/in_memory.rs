//! UserStore - Vec-backed user collection with a monotonic id counter.

use std::sync::{Arc, RwLock};

use super::user::{User, UserPatch};
use crate::error::StoreError;

struct Inner {
    users: Vec<User>,
    next_id: u64,
}

/// In-memory user store.
///
/// Records keep insertion order. Ids come from a counter that only moves
/// forward, so a deleted id is never handed out again. Clone-friendly via Arc;
/// clones share the same collection.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store whose first id is 1.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a store preloaded with Alice (id 1) and Bob (id 2).
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ])
    }

    /// Create a store from existing records. The counter starts above the
    /// highest id present.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner { users, next_id })),
        }
    }

    /// All current records in insertion order.
    pub fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(inner.users.clone())
    }

    pub fn find_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    /// Assign the next id, append the record and return it.
    pub fn create(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<User, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let user = User::new(inner.next_id, name, email);
        inner.next_id += 1;
        inner.users.push(user.clone());
        Ok(user)
    }

    /// Apply `patch` to the record with `id`. Returns `None` if no such record.
    pub fn update(&self, id: u64, patch: &UserPatch) -> Result<Option<User>, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        Ok(inner.users.iter_mut().find(|u| u.id == id).map(|user| {
            user.apply(patch);
            user.clone()
        }))
    }

    /// Remove the record with `id`. Returns `false` if no such record.
    pub fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        Ok(inner.users.len() != before)
    }
}
