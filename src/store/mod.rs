pub mod memory;
pub mod mongo;

pub use self::memory::MemoryUserStore;
pub use self::mongo::MongoUserStore;

use async_trait::async_trait;
use thiserror::Error;

/// A stored account. `password_hash` never crosses the API boundary; the
/// GraphQL layer maps this into its own `id` + `username` object.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Backend(#[from] mongodb::error::Error),
    #[error("store returned a record without an id")]
    MissingId,
}

/// Access to the `users` collection.
///
/// Usernames are not unique; `find_by_username` returns the first match when
/// duplicates exist.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, username: &str, password_hash: &str) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
}
