use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Book not found: {0}")]
    BookNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BookshelfError {
    /// Machine-readable code attached to GraphQL errors as the `code` extension
    pub fn code(&self) -> &'static str {
        match self {
            BookshelfError::BookNotFound(_) => "NOT_FOUND",
            BookshelfError::InvalidInput(_) => "BAD_USER_INPUT",
            _ => "INTERNAL",
        }
    }

    /// Convert into a GraphQL error carrying the `code` extension
    pub fn into_graphql_error(self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

impl From<toml::de::Error> for BookshelfError {
    fn from(err: toml::de::Error) -> Self {
        BookshelfError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for BookshelfError {
    fn from(err: toml::ser::Error) -> Self {
        BookshelfError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl From<::config::ConfigError> for BookshelfError {
    fn from(err: ::config::ConfigError) -> Self {
        BookshelfError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
