use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use critic_api::config::Config;
use critic_api::graphql::build_schema;
use critic_api::repositories::EntityStore;
use critic_api::routes::{app_router, GraphQLState, HealthState};

/// CORS policy for the GraphQL endpoint.
///
/// Configured origins always win. Without them production allows no
/// cross-origin callers and development allows any.
fn build_cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .flatten()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        tracing::info!(origins = ?config.cors_allowed_origins, "CORS restricted to configured origins");
        return CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);
    }

    if config.is_production() {
        tracing::warn!("No usable CORS_ORIGINS in production, cross-origin GraphQL calls are refused");
        CorsLayer::new()
    } else {
        tracing::debug!("No CORS_ORIGINS set, allowing any origin");
        CorsLayer::permissive()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing from RUST_LOG / LOG_LEVEL
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.common.log_level)
                .unwrap_or_else(|_| "critic_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = %config.environment(),
        id_strategy = ?config.game_id_strategy,
        "Starting Critic API server on port {}",
        config.server().port
    );

    let store = Arc::new(EntityStore::seeded(config.game_id_strategy));
    match store.stats() {
        Ok(stats) => tracing::info!(
            games = stats.games,
            authors = stats.authors,
            reviews = stats.reviews,
            "Entity store seeded"
        ),
        Err(e) => tracing::warn!(error = %e, "Entity store unreadable after seeding"),
    }

    let schema = build_schema(store.clone());
    tracing::info!("GraphQL schema built");

    let graphql_state = GraphQLState::new(schema, config.greeting.clone())
        .with_playground(config.playground_enabled);
    let health_state = HealthState::new(store);

    let app = app_router(graphql_state, health_state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config));

    let addr = config.server().socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server ready at http://{}/graphql", addr);
    if config.playground_enabled {
        tracing::info!(
            "GraphQL Playground available at http://{}:{}/graphql/playground",
            addr.ip(),
            addr.port()
        );
    }

    // Use into_make_service_with_connect_info to enable ConnectInfo extractor
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
