/// HTTP surface: GraphQL endpoint, playground and health check

use crate::error::{BookshelfError, Result};

use async_graphql::dynamic::Schema;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the router with GraphQL endpoints
pub fn router(schema: Schema) -> Router {
    // Wrap schema in Arc for sharing across handlers
    let schema = Arc::new(schema);

    Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .route("/health", get(health_check))
        .with_state(schema)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped
pub async fn serve(schema: Schema, addr: SocketAddr) -> Result<()> {
    let app = router(schema);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BookshelfError::Config(
            format!("Failed to bind to {}: {}. Port may be in use.", addr, e)
        ))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| BookshelfError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request).await)
}

async fn graphql_playground() -> Html<String> {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn health_check() -> &'static str {
    "OK"
}
