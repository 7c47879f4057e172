use crate::auth::{token::TokenSigner, Identity};
use crate::graphql::ServiceSchema;
use crate::store::UserStore;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::{header::AUTHORIZATION, HeaderMap},
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tracing::{debug, error};

/// axum handler for `POST /graphql`.
///
/// A valid `Authorization: Bearer` token resolves to an [`Identity`] attached
/// to the request before execution; anything else leaves the request
/// anonymous, which is not an error.
pub async fn graphql(
    Extension(schema): Extension<ServiceSchema>,
    Extension(store): Extension<Arc<dyn UserStore>>,
    Extension(signer): Extension<TokenSigner>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();

    if let Some(identity) = bearer_identity(&headers, &signer, store.as_ref()).await {
        request = request.data(identity);
    }

    schema.execute(request).await.into()
}

/// axum handler for `GET /graphql`: the interactive explorer.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn bearer_identity(
    headers: &HeaderMap,
    signer: &TokenSigner,
    store: &dyn UserStore,
) -> Option<Identity> {
    let token = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    let claims = match signer.verify(token) {
        Ok(claims) => claims,
        Err(error) => {
            debug!("Rejected bearer token: {error}");
            return None;
        }
    };

    match store.find_by_id(&claims.sub).await {
        Ok(Some(user)) => Some(Identity(user)),
        Ok(None) => None,
        Err(error) => {
            error!("Identity lookup failed: {error}");
            None
        }
    }
}
