mod account;

pub use self::account::{AccountMutation, AccountQuery, AuthPayload, User};

use crate::auth::token::TokenSigner;
use crate::store::UserStore;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use std::sync::Arc;

#[derive(MergedObject, Default)]
pub struct Query(AccountQuery);

#[derive(MergedObject, Default)]
pub struct Mutation(AccountMutation);

pub type ServiceSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the executable schema with its collaborators injected as schema
/// data. The per-request identity is attached as request data by the HTTP
/// layer.
pub fn schema(store: Arc<dyn UserStore>, signer: TokenSigner) -> ServiceSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(store)
        .data(signer)
        .finish()
}
