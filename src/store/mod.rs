/// Record store for books
///
/// `BookStore` is the data-access contract the resolvers are written against.
/// Resolvers receive it as an injected `Arc<dyn BookStore>`; `SqliteBookStore`
/// is the production implementation.

mod sqlite;

pub use sqlite::SqliteBookStore;

use crate::error::{BookshelfError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// A stored book row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<String>,
    pub review: Option<i32>,
}

/// The content fields of a book, everything except the store-assigned id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<String>,
    pub review: Option<i32>,
}

impl Book {
    /// Replace every content field, including with `None`
    pub fn overwrite(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.year_published = fields.year_published;
        self.review = fields.review;
    }
}

pub type SharedBookStore = Arc<dyn BookStore>;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new book and return it with its assigned id
    async fn insert(&self, fields: BookFields) -> Result<Book>;

    /// Fetch a book by id, `None` when absent
    async fn find(&self, id: i64) -> Result<Option<Book>>;

    /// All books in storage order
    async fn list(&self) -> Result<Vec<Book>>;

    /// Write every content field of an existing book
    async fn save(&self, book: &Book) -> Result<()>;

    /// Remove a book by id
    async fn delete(&self, id: i64) -> Result<()>;

    /// Fetch a book by id, failing with `BookNotFound` when absent
    async fn get(&self, id: i64) -> Result<Book> {
        self.find(id).await?.ok_or(BookshelfError::BookNotFound(id))
    }
}
