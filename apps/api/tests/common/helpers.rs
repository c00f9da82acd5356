//! Test helper functions for API integration tests
//!
//! Provides utility functions for executing GraphQL against a schema or the
//! full HTTP router and unpacking the responses.

#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Variables};
use axum::{
    body::Body,
    http::{header, Request as HttpRequest, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use critic_api::graphql::{build_schema, CriticSchema};
use critic_api::models::Greeting;
use critic_api::repositories::EntityStore;
use critic_api::routes::{app_router, GraphQLState, HealthState};

/// Outcome of a GraphQL execution as plain JSON
#[derive(Debug)]
pub struct Outcome {
    pub data: Value,
    pub errors: Vec<Value>,
}

impl Outcome {
    /// Panic unless the response is error-free
    pub fn assert_ok(&self) -> &Value {
        assert!(self.errors.is_empty(), "unexpected errors: {:?}", self.errors);
        &self.data
    }
}

/// Build a schema over the given store
pub fn schema_for(store: Arc<EntityStore>) -> CriticSchema {
    build_schema(store)
}

/// Execute a GraphQL document without variables
pub async fn execute(schema: &CriticSchema, query: &str) -> Outcome {
    execute_with_vars(schema, query, Value::Null).await
}

/// Execute a GraphQL document with JSON variables
pub async fn execute_with_vars(schema: &CriticSchema, query: &str, variables: Value) -> Outcome {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;

    Outcome {
        errors: response
            .errors
            .iter()
            .map(|error| serde_json::to_value(error).unwrap())
            .collect(),
        data: response.data.into_json().unwrap(),
    }
}

/// Build the full application router over the given store
pub fn test_app(store: Arc<EntityStore>) -> Router {
    let graphql_state = GraphQLState::new(build_schema(store.clone()), Greeting::new("test"));
    app_router(graphql_state, HealthState::new(store))
}

/// POST a GraphQL body to `/graphql` and decode the JSON response
pub async fn post_graphql(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// GET a path and return status plus body text
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
