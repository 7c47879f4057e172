use crate::store::{StoreError, User, UserStore};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

/// In-memory `UserStore` for tests and local experiments.
///
/// Mirrors the document store's observable behavior: ids are generated object
/// ids, usernames are not unique, lookups return the first match in insertion
/// order.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let user = User {
            id: ObjectId::new().to_hex(),
            username: username.to_owned(),
            password_hash: password_hash.to_owned(),
        };

        self.users.write().await.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;

        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;

        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}
