//! GraphQL HTTP route handlers
//!
//! - `POST /graphql` - Execute a query or mutation
//! - `GET /graphql/sdl` - Schema definition language of the served schema
//! - `GET /graphql/playground` - GraphQL Playground (when enabled)

use std::net::SocketAddr;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::graphql::CriticSchema;
use crate::middleware::request_metadata;
use crate::models::{Greeting, RequestContext};

/// Shared state for GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    /// Executable schema
    pub schema: CriticSchema,
    /// Greeting payload copied into every request context
    pub greeting: Greeting,
    /// Whether the playground route is mounted
    pub playground_enabled: bool,
}

impl GraphQLState {
    /// Create GraphQL state with the playground enabled
    pub fn new(schema: CriticSchema, greeting: Greeting) -> Self {
        Self {
            schema,
            greeting,
            playground_enabled: true,
        }
    }

    /// Enable or disable the playground route
    pub fn with_playground(mut self, enabled: bool) -> Self {
        self.playground_enabled = enabled;
        self
    }
}

/// Create the GraphQL router
pub fn graphql_router(state: GraphQLState) -> Router {
    let mut router = Router::new()
        .route("/", post(graphql_handler))
        .route("/sdl", get(graphql_sdl));

    if state.playground_enabled {
        router = router.route("/playground", get(graphql_playground));
    }

    router.with_state(state)
}

/// GraphQL handler that executes requests against the schema
///
/// Builds the request context (greeting plus request metadata) and injects
/// it into the GraphQL request before execution.
async fn graphql_handler(
    State(state): State<GraphQLState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let metadata = request_metadata(&headers, connect_info.as_ref());
    let request_id = metadata.request_id;
    let context = RequestContext::new(state.greeting.clone(), metadata);

    let request = req.into_inner().data(context);
    let operation = request.operation_name.clone();

    let response = state.schema.execute(request).await;
    tracing::debug!(
        %request_id,
        operation = operation.as_deref().unwrap_or("<anonymous>"),
        errors = response.errors.len(),
        "GraphQL request executed"
    );

    response.into()
}

/// Schema definition language of the served schema
async fn graphql_sdl(State(state): State<GraphQLState>) -> String {
    state.schema.sdl()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
