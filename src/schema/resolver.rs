/// GraphQL resolvers for query operations
///
/// This module provides the read-only resolvers:
/// - `allBooks`, every book in storage order
/// - `book(bookId)`, a single book by id, raising not-found on a miss

use crate::error::Result;
use crate::schema::input::required_id;
use crate::schema::type_mapping::{book_field_value, BOOK_TYPE};
use crate::store::{Book, BookStore, SharedBookStore};

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, ResolverContext, TypeRef};

/// Fetch every book in storage order
pub async fn all_books(store: &dyn BookStore) -> Result<Vec<Book>> {
    store.list().await
}

/// Fetch one book, failing with `BookNotFound` when the id matches nothing
pub async fn book(store: &dyn BookStore, book_id: i64) -> Result<Book> {
    store.get(book_id).await
}

/// Create the `allBooks` field
pub fn create_all_books_field(field_name: &str, store: SharedBookStore) -> Field {
    Field::new(
        field_name,
        TypeRef::named_nn_list_nn(BOOK_TYPE),
        move |_ctx: ResolverContext| {
            let store = store.clone();

            FieldFuture::new(async move {
                let books = all_books(store.as_ref())
                    .await
                    .map_err(|e| e.into_graphql_error())?;

                tracing::debug!("allBooks returned {} books", books.len());

                let results: Vec<FieldValue> = books.iter().map(book_field_value).collect();
                Ok(Some(FieldValue::list(results)))
            })
        },
    )
    .description("All books in storage order")
}

/// Create the `book(bookId)` field
pub fn create_book_field(field_name: &str, store: SharedBookStore) -> Field {
    Field::new(
        field_name,
        TypeRef::named(BOOK_TYPE),
        move |ctx: ResolverContext| {
            let store = store.clone();

            FieldFuture::new(async move {
                let book_id_arg = ctx.args.get("bookId").map(|v| v.as_value().clone());
                let book_id = required_id(book_id_arg.as_ref(), "bookId")
                    .map_err(|e| e.into_graphql_error())?;

                tracing::debug!("Fetching book {}", book_id);

                let found = book(store.as_ref(), book_id)
                    .await
                    .map_err(|e| e.into_graphql_error())?;

                Ok(Some(book_field_value(&found)))
            })
        },
    )
    .argument(InputValue::new("bookId", TypeRef::named(TypeRef::INT)))
    .description("A single book by id; fails with NOT_FOUND when absent")
}
