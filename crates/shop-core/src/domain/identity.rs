//! Authenticated caller recovered from a bearer token

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
}

impl Identity {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn is(&self, user_id: &Uuid) -> bool {
        &self.user_id == user_id
    }
}
