use crate::store::{StoreError, User, UserStore};
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

const USERS_COLLECTION: &str = "users";

/// `UserStore` backed by a MongoDB `users` collection.
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    username: String,
    password_hash: String,
}

impl UserDocument {
    fn into_user(self) -> Result<User, StoreError> {
        Ok(User {
            id: self.id.ok_or(StoreError::MissingId)?.to_hex(),
            username: self.username,
            password_hash: self.password_hash,
        })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let document = UserDocument {
            id: None,
            username: username.to_owned(),
            password_hash: password_hash.to_owned(),
        };

        let outcome = self.users.insert_one(&document).await?;

        let id = outcome
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingId)?;

        Ok(User {
            id: id.to_hex(),
            username: document.username,
            password_hash: document.password_hash,
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let found = self.users.find_one(doc! { "username": username }).await?;

        found.map(UserDocument::into_user).transpose()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        // Subjects that are not object ids cannot match any stored record.
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self.users.find_one(doc! { "_id": object_id }).await?;

        found.map(UserDocument::into_user).transpose()
    }
}
