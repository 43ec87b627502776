/// GraphQL resolvers for mutation operations
///
/// Each mutation returns a payload object named after the operation
/// (`CreateBook`, `UpdateBook`, `DeleteBook`) with a single nullable `book` field.

use crate::error::{BookshelfError, Result};
use crate::schema::input::{book_input_type, required_id, BookInput, BookUpdate, BOOK_INPUT_TYPE};
use crate::schema::type_mapping::{book_field_value, BOOK_TYPE};
use crate::store::{Book, BookFields, BookStore, SharedBookStore};

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputObject, InputValue, Object, ResolverContext, TypeRef,
};
use async_graphql::Value;

pub const CREATE_BOOK_PAYLOAD: &str = "CreateBook";
pub const UPDATE_BOOK_PAYLOAD: &str = "UpdateBook";
pub const DELETE_BOOK_PAYLOAD: &str = "DeleteBook";

/// Persist a new book; the store assigns its id
pub async fn create_book(store: &dyn BookStore, fields: BookFields) -> Result<Book> {
    let book = store.insert(fields).await?;
    tracing::info!("Created book {}", book.id);
    Ok(book)
}

/// Overwrite every content field of an existing book
///
/// Returns `None` when the id matches nothing, including a row deleted between
/// the lookup and the write; this path never raises not-found.
pub async fn update_book(store: &dyn BookStore, update: BookUpdate) -> Result<Option<Book>> {
    let Some(mut book) = store.find(update.id).await? else {
        tracing::info!("Update skipped, book {} does not exist", update.id);
        return Ok(None);
    };

    book.overwrite(update.fields);
    match store.save(&book).await {
        Ok(()) => {}
        Err(BookshelfError::BookNotFound(id)) => {
            tracing::info!("Update skipped, book {} was deleted concurrently", id);
            return Ok(None);
        }
        Err(e) => return Err(e),
    }

    tracing::info!("Updated book {}", book.id);
    Ok(Some(book))
}

/// Delete a book and return the record as it was before removal
///
/// Fails with `BookNotFound` when the id matches nothing.
pub async fn delete_book(store: &dyn BookStore, id: i64) -> Result<Book> {
    let book = store.get(id).await?;
    store.delete(book.id).await?;

    tracing::info!("Deleted book {}", book.id);
    Ok(book)
}

/// Input types the mutation fields reference
pub fn mutation_input_types() -> Vec<InputObject> {
    vec![book_input_type()]
}

/// Payload object types returned by the mutation fields
pub fn mutation_payload_types() -> Vec<Object> {
    vec![
        payload_type(CREATE_BOOK_PAYLOAD),
        payload_type(UPDATE_BOOK_PAYLOAD),
        payload_type(DELETE_BOOK_PAYLOAD),
    ]
}

/// `{ book: Book }` payload; the parent value is the book's GraphQL value or null
fn payload_type(name: &str) -> Object {
    Object::new(name).field(Field::new("book", TypeRef::named(BOOK_TYPE), |ctx| {
        FieldFuture::new(async move {
            let book = ctx.parent_value.try_downcast_ref::<Value>()?;

            if let Value::Null = book {
                return Ok(None);
            }

            Ok(Some(FieldValue::owned_any(book.clone())))
        })
    }))
}

fn payload_value(book: Option<&Book>) -> FieldValue<'static> {
    match book {
        Some(book) => book_field_value(book),
        None => FieldValue::owned_any(Value::Null),
    }
}

/// Create the `createBook(bookData)` field
pub fn create_create_book_field(field_name: &str, store: SharedBookStore) -> Field {
    Field::new(
        field_name,
        TypeRef::named(CREATE_BOOK_PAYLOAD),
        move |ctx: ResolverContext| {
            let store = store.clone();

            FieldFuture::new(async move {
                let input = book_data(&ctx)?;
                let book = create_book(store.as_ref(), input.into_new_book())
                    .await
                    .map_err(|e| e.into_graphql_error())?;

                Ok(Some(payload_value(Some(&book))))
            })
        },
    )
    .argument(InputValue::new("bookData", TypeRef::named_nn(BOOK_INPUT_TYPE)))
}

/// Create the `updateBook(bookData)` field
pub fn create_update_book_field(field_name: &str, store: SharedBookStore) -> Field {
    Field::new(
        field_name,
        TypeRef::named(UPDATE_BOOK_PAYLOAD),
        move |ctx: ResolverContext| {
            let store = store.clone();

            FieldFuture::new(async move {
                let update = book_data(&ctx)?
                    .into_update()
                    .map_err(|e| e.into_graphql_error())?;
                let book = update_book(store.as_ref(), update)
                    .await
                    .map_err(|e| e.into_graphql_error())?;

                Ok(Some(payload_value(book.as_ref())))
            })
        },
    )
    .argument(InputValue::new("bookData", TypeRef::named_nn(BOOK_INPUT_TYPE)))
}

/// Create the `deleteBook(id)` field
pub fn create_delete_book_field(field_name: &str, store: SharedBookStore) -> Field {
    Field::new(
        field_name,
        TypeRef::named(DELETE_BOOK_PAYLOAD),
        move |ctx: ResolverContext| {
            let store = store.clone();

            FieldFuture::new(async move {
                let id_arg = ctx.args.get("id").map(|v| v.as_value().clone());
                let id = required_id(id_arg.as_ref(), "id").map_err(|e| e.into_graphql_error())?;

                let book = delete_book(store.as_ref(), id)
                    .await
                    .map_err(|e| e.into_graphql_error())?;

                Ok(Some(payload_value(Some(&book))))
            })
        },
    )
    .argument(InputValue::new("id", TypeRef::named(TypeRef::ID)))
}

fn book_data(ctx: &ResolverContext<'_>) -> async_graphql::Result<BookInput> {
    let value = ctx.args.try_get("bookData")?;
    BookInput::from_value(value.as_value()).map_err(|e| e.into_graphql_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteBookStore;
    use async_trait::async_trait;

    /// Store whose rows vanish between a lookup and the following write
    struct VanishingStore {
        inner: SqliteBookStore,
    }

    #[async_trait]
    impl BookStore for VanishingStore {
        async fn insert(&self, fields: BookFields) -> Result<Book> {
            self.inner.insert(fields).await
        }

        async fn find(&self, id: i64) -> Result<Option<Book>> {
            let found = self.inner.find(id).await?;
            if found.is_some() {
                self.inner.delete(id).await?;
            }
            Ok(found)
        }

        async fn list(&self) -> Result<Vec<Book>> {
            self.inner.list().await
        }

        async fn save(&self, book: &Book) -> Result<()> {
            self.inner.save(book).await
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.inner.delete(id).await
        }
    }

    fn fields(title: &str, review: i32) -> BookFields {
        BookFields {
            title: Some(title.to_string()),
            author: Some("Austen".to_string()),
            year_published: Some("1815".to_string()),
            review: Some(review),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = SqliteBookStore::in_memory().await.unwrap();

        let a = create_book(&store, fields("Emma", 4)).await.unwrap();
        let b = create_book(&store, fields("Emma", 4)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.title, b.title);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let store = SqliteBookStore::in_memory().await.unwrap();
        let book = create_book(&store, fields("Emma", 4)).await.unwrap();

        let updated = update_book(
            &store,
            BookUpdate {
                id: book.id,
                fields: BookFields {
                    review: Some(2),
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap()
        .expect("book should exist");

        assert_eq!(updated.review, Some(2));
        assert_eq!(updated.title, None);
        assert_eq!(store.get(book.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = SqliteBookStore::in_memory().await.unwrap();

        let result = update_book(
            &store,
            BookUpdate {
                id: 404,
                fields: fields("Emma", 4),
            },
        )
        .await
        .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_update_of_concurrently_deleted_book_returns_none() {
        let store = VanishingStore {
            inner: SqliteBookStore::in_memory().await.unwrap(),
        };
        let book = store.insert(fields("Emma", 4)).await.unwrap();

        let result = update_book(
            &store,
            BookUpdate {
                id: book.id,
                fields: fields("Emma", 1),
            },
        )
        .await
        .unwrap();

        assert_eq!(result, None);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_book() {
        let store = SqliteBookStore::in_memory().await.unwrap();
        let book = create_book(&store, fields("Persuasion", 5)).await.unwrap();

        let deleted = delete_book(&store, book.id).await.unwrap();

        assert_eq!(deleted, book);
        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(
            delete_book(&store, book.id).await,
            Err(BookshelfError::BookNotFound(_))
        ));
    }
}
