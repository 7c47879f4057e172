pub mod password;
pub mod token;

use self::token::TokenSigner;
use crate::store::{StoreError, User, UserStore};
use thiserror::Error;

/// The authenticated user attached to a request's GraphQL context by the
/// transport layer. Absent when no valid bearer token was presented.
#[derive(Debug, Clone)]
pub struct Identity(pub User);

/// Outcome of a successful login: the user plus a freshly minted token.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Incorrect username.")]
    IncorrectUsername,
    #[error("Incorrect password.")]
    IncorrectPassword,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Check a username/password pair against the store and mint a bearer token.
///
/// Looks up the first user matching `username`, compares the password against
/// the stored bcrypt hash, and signs a token for the user's id. The two
/// failure messages are distinct on purpose and user-facing.
pub async fn verify_credentials(
    store: &dyn UserStore,
    signer: &TokenSigner,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let user = store
        .find_by_username(username)
        .await?
        .ok_or(AuthError::IncorrectUsername)?;

    if !password::verify(password, &user.password_hash)? {
        return Err(AuthError::IncorrectPassword);
    }

    let token = signer.mint(&user.id)?;

    Ok(Session { user, token })
}
