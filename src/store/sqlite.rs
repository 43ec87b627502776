use crate::config::DatabaseConfig;
use crate::error::{BookshelfError, Result};
use crate::store::{Book, BookFields, BookStore};

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

const CREATE_BOOK_TABLE: &str = "CREATE TABLE IF NOT EXISTS book (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    author TEXT,
    year_published TEXT,
    review INTEGER
)";

const SELECT_BOOK: &str = "SELECT id, title, author, year_published, review FROM book";

/// SQLite-backed book store
#[derive(Clone)]
pub struct SqliteBookStore {
    pool: SqlitePool,
}

impl SqliteBookStore {
    /// Connect to the configured database and make sure the `book` table exists
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        config.validate().map_err(BookshelfError::Config)?;

        // Every connection to an in-memory database is its own database, so keep
        // exactly one and never let the pool recycle it.
        let options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        tracing::debug!("Connecting to {}", config.url);

        let pool = options.connect(&config.url).await?;
        Self::from_pool(pool).await
    }

    /// Private in-memory store
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }

    /// Wrap an existing pool
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_BOOK_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for SqliteBookStore {
    async fn insert(&self, fields: BookFields) -> Result<Book> {
        let result = sqlx::query(
            "INSERT INTO book (title, author, year_published, review) VALUES (?, ?, ?, ?)",
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.year_published)
        .bind(fields.review)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!("Inserted book {}", id);

        Ok(Book {
            id,
            title: fields.title,
            author: fields.author,
            year_published: fields.year_published,
            review: fields.review,
        })
    }

    async fn find(&self, id: i64) -> Result<Option<Book>> {
        let sql = format!("{} WHERE id = ?", SELECT_BOOK);
        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>> {
        let sql = format!("{} ORDER BY id", SELECT_BOOK);
        let books = sqlx::query_as::<_, Book>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    async fn save(&self, book: &Book) -> Result<()> {
        let result = sqlx::query(
            "UPDATE book SET title = ?, author = ?, year_published = ?, review = ? WHERE id = ?",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.year_published)
        .bind(book.review)
        .bind(book.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(BookshelfError::BookNotFound(book.id));
        }

        tracing::debug!("Updated book {}", book.id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM book WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BookshelfError::BookNotFound(id));
        }

        tracing::debug!("Deleted book {}", id);
        Ok(())
    }
}
