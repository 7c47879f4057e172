pub mod handlers;

use crate::auth::token::TokenSigner;
use crate::cli::globals::Config;
use crate::graphql;
use crate::store::{MongoUserStore, UserStore};
use anyhow::{Context as _, Result};
use axum::{
    body::Body,
    extract::{Extension, MatchedPath},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method, Request,
    },
    routing::get,
    Router,
};
use mongodb::Client;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;

/// Database used when the connection string does not name one.
const DEFAULT_DATABASE: &str = "anagrafe";

/// Connect to the document store and serve the GraphQL endpoint.
pub async fn new(config: &Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("Failed to connect to MongoDB")?;

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(&db));
    let signer = TokenSigner::new(&config.jwt_secret);

    serve(config.port, store, signer).await
}

/// Serve the API on `port` with an already constructed store handle.
pub async fn serve(port: u16, store: Arc<dyn UserStore>, signer: TokenSigner) -> Result<()> {
    let schema = graphql::schema(store.clone(), signer.clone());

    // The explorer and the API share the endpoint, like the source service.
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    let app = Router::new()
        .route(
            "/graphql",
            get(handlers::graphiql).post(handlers::graphql),
        )
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(schema))
                .layer(Extension(store))
                .layer(Extension(signer)),
        );

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("GraphQL server listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|id| id.to_str().ok())
        .unwrap_or("");

    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!("request", method = %request.method(), path, request_id)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {error}");
        return;
    }

    info!("Gracefully shutting down");
}
