//! End-to-end schema execution against the in-memory store.

use anagrafe::auth::{token::TokenSigner, Identity};
use anagrafe::graphql::{self, ServiceSchema};
use anagrafe::store::{MemoryUserStore, UserStore};
use async_graphql::Request;
use secrecy::SecretString;
use serde_json::Value;
use std::sync::Arc;

fn signer() -> TokenSigner {
    TokenSigner::new(&SecretString::from("integration-secret".to_string()))
}

fn service() -> (ServiceSchema, Arc<dyn UserStore>, TokenSigner) {
    let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let signer = signer();
    let schema = graphql::schema(store.clone(), signer.clone());

    (schema, store, signer)
}

/// Execute a query and return its `data` as JSON, failing on any error.
async fn execute(schema: &ServiceSchema, request: impl Into<Request>) -> Value {
    let response = schema.execute(request).await;

    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );

    response.data.into_json().unwrap()
}

/// Execute a query expected to fail and return the first error message.
async fn execute_err(schema: &ServiceSchema, request: impl Into<Request>) -> String {
    let response = schema.execute(request).await;

    assert!(!response.errors.is_empty(), "expected an error");

    response.errors[0].message.clone()
}

#[tokio::test]
async fn hello_returns_the_greeting() {
    let (schema, _, _) = service();

    let data = execute(&schema, "{ hello }").await;

    assert_eq!(data["hello"], "Hello, GraphQL World!");
}

#[tokio::test]
async fn signup_returns_id_and_username_only() {
    let (schema, _, _) = service();

    let data = execute(
        &schema,
        r#"mutation { signup(username: "a", password: "p") { id username } }"#,
    )
    .await;

    assert_eq!(data["signup"]["username"], "a");
    assert!(data["signup"]["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn signup_never_echoes_the_password() {
    let (schema, _, _) = service();

    let response = schema
        .execute(r#"mutation { signup(username: "a", password: "p") { id username } }"#)
        .await;

    let body = serde_json::to_string(&response).unwrap();
    assert!(!body.contains("\"p\""));
    assert!(!body.contains("password"));
}

#[tokio::test]
async fn signup_then_login_round_trips() {
    let (schema, _, signer) = service();

    execute(
        &schema,
        r#"mutation { signup(username: "a", password: "p") { id } }"#,
    )
    .await;

    let data = execute(
        &schema,
        r#"mutation { login(username: "a", password: "p") { token user { id username } } }"#,
    )
    .await;

    assert_eq!(data["login"]["user"]["username"], "a");

    // The minted token verifies under the same secret and names the user.
    let token = data["login"]["token"].as_str().unwrap();
    let claims = signer.verify(token).unwrap();
    assert_eq!(claims.sub, data["login"]["user"]["id"].as_str().unwrap());
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn login_with_unknown_username_fails() {
    let (schema, _, _) = service();

    let message = execute_err(
        &schema,
        r#"mutation { login(username: "ghost", password: "x") { token } }"#,
    )
    .await;

    assert_eq!(message, "Incorrect username.");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let (schema, _, _) = service();

    execute(
        &schema,
        r#"mutation { signup(username: "a", password: "p") { id } }"#,
    )
    .await;

    let message = execute_err(
        &schema,
        r#"mutation { login(username: "a", password: "wrong") { token } }"#,
    )
    .await;

    assert_eq!(message, "Incorrect password.");
}

#[tokio::test]
async fn duplicate_signups_login_as_the_first_record() {
    let (schema, _, _) = service();

    let first = execute(
        &schema,
        r#"mutation { signup(username: "a", password: "p1") { id } }"#,
    )
    .await;
    execute(
        &schema,
        r#"mutation { signup(username: "a", password: "p2") { id } }"#,
    )
    .await;

    let data = execute(
        &schema,
        r#"mutation { login(username: "a", password: "p1") { user { id } } }"#,
    )
    .await;

    assert_eq!(data["login"]["user"]["id"], first["signup"]["id"]);
}

#[tokio::test]
async fn current_user_is_null_without_identity() {
    let (schema, _, _) = service();

    let data = execute(&schema, "{ currentUser { id username } }").await;

    assert_eq!(data["currentUser"], Value::Null);
}

#[tokio::test]
async fn current_user_reflects_the_attached_identity() {
    let (schema, store, _) = service();

    execute(
        &schema,
        r#"mutation { signup(username: "a", password: "p") { id } }"#,
    )
    .await;

    let user = store.find_by_username("a").await.unwrap().unwrap();
    let request = Request::new("{ currentUser { id username } }").data(Identity(user.clone()));

    let data = execute(&schema, request).await;

    assert_eq!(data["currentUser"]["id"], user.id);
    assert_eq!(data["currentUser"]["username"], "a");
}
