//! HTTP route handlers for the Critic API
//!
//! This module contains all HTTP endpoints:
//! - GraphQL execution, SDL and playground
//! - Health check and status endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GraphQLState};
pub use health::{health_router, HealthState};

use axum::{routing::get, Router};

/// Build the application router without transport layers
///
/// Tracing and CORS layers are added by the binary.
pub fn app_router(graphql_state: GraphQLState, health_state: HealthState) -> Router {
    Router::new()
        .route("/", get(root))
        // GraphQL endpoints: /graphql, /graphql/sdl, /graphql/playground
        .nest("/graphql", graphql_router(graphql_state))
        // Nested health routes: /health, /health/live, /health/ready
        .nest("/health", health_router(health_state))
}

async fn root() -> &'static str {
    "Welcome to Critic - game review graph API"
}
