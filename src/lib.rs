pub mod config;
pub mod error;
pub mod schema;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use crate::config::{Config, DatabaseConfig, ServerConfig};
pub use crate::error::{BookshelfError, Result};
pub use crate::schema::SchemaBuilder;
pub use crate::store::{Book, BookFields, BookStore, SharedBookStore, SqliteBookStore};
