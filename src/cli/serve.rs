use bookshelf::error::{BookshelfError, Result};
use bookshelf::schema::SchemaBuilder;
use bookshelf::store::{BookStore, SqliteBookStore};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>) -> Result<()> {

    tracing::info!("📖 Loading configuration from {}", config_path);

    // Load config
    let config = bookshelf::config::load_config(&config_path)?;

    // Use provided port or default from config
    let server_port = config.server.effective_port(port);

    tracing::info!("🗄️  Opening record store at {}", config.database.url);
    let store = SqliteBookStore::connect(&config.database).await?;
    let book_count = store.list().await?.len();
    tracing::info!("   {} books in the catalogue", book_count);

    tracing::info!("🔧 Building GraphQL schema...");
    let schema = SchemaBuilder::new(Arc::new(store)).build_schema()?;

    let bind: IpAddr = config
        .server
        .bind
        .parse()
        .map_err(|_| BookshelfError::Config(format!("Invalid bind address '{}'", config.server.bind)))?;
    let addr = SocketAddr::new(bind, server_port);

    tracing::info!("✅ Schema built successfully");
    tracing::info!("🚀 GraphQL server running on http://{}", addr);
    tracing::info!("📊 Playground: http://{}/graphql", addr);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    // Start the HTTP server
    bookshelf::server::serve(schema, addr).await
}
