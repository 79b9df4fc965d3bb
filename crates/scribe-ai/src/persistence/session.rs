//! Source of the signed-in user's id.

use async_trait::async_trait;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The signed-in user's id, if any.
    async fn user_id(&self) -> Option<String>;
}

/// A session whose user id is fixed up front (from config or environment).
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user_id: Option<String>,
}

impl StaticSession {
    pub fn new(user_id: Option<String>) -> Self {
        Self { user_id }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}
