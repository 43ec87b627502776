/// GraphQL schema for the book API
///
/// This module provides the `Book` type mapping, the `BookInput` input object,
/// the query and mutation resolvers, and the `SchemaBuilder` that wires them to
/// an injected record store.

mod builder;
mod input;
mod mutation;
mod resolver;
mod type_mapping;

pub use builder::{FieldFactory, SchemaBuilder, MUTATION_OPERATIONS, QUERY_OPERATIONS};
pub use input::{parse_id, BookInput, BookUpdate};
pub use mutation::{create_book, delete_book, update_book};
pub use resolver::{all_books, book};
pub use type_mapping::{book_object_type, book_to_graphql_value};
