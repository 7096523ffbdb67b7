use serde::{Deserialize, Serialize};

/// A stored user record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Overwrite the fields present in `patch`. Empty strings count as absent.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = patch.name.as_deref().filter(|s| !s.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(email) = patch.email.as_deref().filter(|s| !s.is_empty()) {
            self.email = email.to_string();
        }
    }
}

/// Partial update for a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
