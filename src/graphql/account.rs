use crate::auth::{self, password, token::TokenSigner, Identity};
use crate::store::{self, UserStore};
use async_graphql::{Context, Object, Result, SimpleObject, ID};
use std::sync::Arc;
use tracing::{debug, instrument};

const GREETING: &str = "Hello, GraphQL World!";

/// Account as exposed through the API: never the password or its hash.
#[derive(SimpleObject, Debug, Clone)]
pub struct User {
    pub id: ID,
    pub username: String,
}

impl From<store::User> for User {
    fn from(user: store::User) -> Self {
        Self {
            id: ID(user.id),
            username: user.username,
        }
    }
}

/// What a successful login returns: the bearer token plus its user.
#[derive(SimpleObject, Debug, Clone)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[derive(Default)]
pub struct AccountQuery;

#[Object]
impl AccountQuery {
    async fn hello(&self) -> &'static str {
        GREETING
    }

    /// The identity attached to this request, or null when none was.
    async fn current_user(&self, ctx: &Context<'_>) -> Option<User> {
        ctx.data_opt::<Identity>()
            .map(|identity| User::from(identity.0.clone()))
    }
}

#[derive(Default)]
pub struct AccountMutation;

#[Object]
impl AccountMutation {
    /// Create an account. Usernames are not checked for uniqueness.
    #[instrument(skip_all, fields(username = %username))]
    async fn signup(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<User> {
        let store = ctx.data::<Arc<dyn UserStore>>()?;

        let password_hash = password::hash(&password)?;
        let user = store.insert(&username, &password_hash).await?;

        debug!(user_id = %user.id, "account created");

        Ok(user.into())
    }

    /// Authenticate and mint a bearer token for the account.
    #[instrument(skip_all, fields(username = %username))]
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<AuthPayload> {
        let store = ctx.data::<Arc<dyn UserStore>>()?;
        let signer = ctx.data::<TokenSigner>()?;

        let session = auth::verify_credentials(store.as_ref(), signer, &username, &password).await?;

        debug!(user_id = %session.user.id, "login succeeded");

        Ok(AuthPayload {
            token: session.token,
            user: session.user.into(),
        })
    }
}
