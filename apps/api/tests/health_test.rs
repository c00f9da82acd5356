//! Integration tests for the HTTP surface
//!
//! Exercises the real application router: health probes, GraphQL over HTTP,
//! the SDL endpoint and the playground.

mod common;

use axum::http::StatusCode;
use common::*;
use critic_api::repositories::GameIdStrategy;
use serde_json::json;

#[tokio::test]
async fn test_root_endpoint() {
    let app = test_app(seeded_store(GameIdStrategy::Sequential));

    let (status, body) = get_text(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Critic"));
}

#[tokio::test]
async fn test_simple_health_check() {
    let app = test_app(seeded_store(GameIdStrategy::Sequential));

    let (status, body) = get_text(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = test_app(seeded_store(GameIdStrategy::Sequential));

    let (status, body) = get_text(app, "/health/live").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "alive");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_readiness_reports_collection_sizes() {
    let app = test_app(library_store());

    let (status, body) = get_text(app, "/health/ready").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "status": "ready",
            "collections": { "games": 3, "authors": 2, "reviews": 4 }
        })
    );
}

#[tokio::test]
async fn test_graphql_over_http() {
    let app = test_app(seeded_store(GameIdStrategy::Sequential));

    let (status, body) = post_graphql(
        app,
        json!({ "query": "{ games { __typename ... on GameSuccessResults { games { id } } } }" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {
                "games": {
                    "__typename": "GameSuccessResults",
                    "games": [{ "id": "1" }, { "id": "2" }]
                }
            }
        })
    );
}

#[tokio::test]
async fn test_mutation_over_http_persists_in_store() {
    let store = seeded_store(GameIdStrategy::Sequential);

    let (_, body) = post_graphql(
        test_app(store.clone()),
        json!({
            "query": "mutation($game: AddGameInput!) { addGame(game: $game) { id } }",
            "variables": { "game": { "title": "Stray", "platforms": ["ps5"], "name": "Stray" } }
        }),
    )
    .await;
    assert_eq!(body["data"]["addGame"]["id"], "3");

    let (_, body) = post_graphql(
        test_app(store),
        json!({ "query": r#"{ game(id: "3") { name platforms } }"# }),
    )
    .await;
    assert_eq!(
        body["data"],
        json!({ "game": { "name": "Stray", "platforms": ["ps5"] } })
    );
}

#[tokio::test]
async fn test_partial_failure_over_http() {
    let store = std::sync::Arc::new(critic_api::EntityStore::with_records(
        vec![game("1", "Tetris", "Tetris", &["gameboy"])],
        vec![author("1", "alexey", true)],
        vec![review("1", 10, "1", "1"), review("2", 1, "1", "404")],
        GameIdStrategy::Sequential,
    ));

    let (status, body) = post_graphql(
        test_app(store),
        json!({ "query": "{ reviews { id author { name } } }" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "reviews": [{ "id": "1", "author": { "name": "alexey" } }, null] })
    );
    assert_eq!(body["errors"][0]["message"], "Author not found: 404");
    assert_eq!(body["errors"][0]["path"], json!(["reviews", 1, "author"]));
}

#[tokio::test]
async fn test_sdl_endpoint() {
    let app = test_app(seeded_store(GameIdStrategy::Sequential));

    let (status, sdl) = get_text(app, "/graphql/sdl").await;

    assert_eq!(status, StatusCode::OK);
    assert!(sdl.contains("union GamesResults"));
    assert!(sdl.contains("deleteGame(id: ID!): [Game]"));
}

#[tokio::test]
async fn test_playground_served_when_enabled() {
    let app = test_app(seeded_store(GameIdStrategy::Sequential));

    let (status, html) = get_text(app, "/graphql/playground").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("GraphQL Playground"));
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let app = test_app(seeded_store(GameIdStrategy::Sequential));

    let (status, _) = get_text(app, "/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
