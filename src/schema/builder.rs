/// GraphQL schema builder
///
/// This module provides the `SchemaBuilder` which composes the query and mutation
/// resolvers into a single executable schema. Dispatch is an explicit table from
/// operation name to field factory; every factory receives the injected store.

use crate::error::{BookshelfError, Result};
use crate::schema::mutation::{
    create_create_book_field, create_delete_book_field, create_update_book_field,
    mutation_input_types, mutation_payload_types,
};
use crate::schema::resolver::{create_all_books_field, create_book_field};
use crate::schema::type_mapping::book_object_type;
use crate::store::SharedBookStore;

use async_graphql::dynamic::{Field, Object, Schema};

/// Builds one resolver field for the named operation
pub type FieldFactory = fn(&str, SharedBookStore) -> Field;

/// Query operations, in schema order
pub const QUERY_OPERATIONS: &[(&str, FieldFactory)] = &[
    ("allBooks", create_all_books_field),
    ("book", create_book_field),
];

/// Mutation operations, in schema order
pub const MUTATION_OPERATIONS: &[(&str, FieldFactory)] = &[
    ("createBook", create_create_book_field),
    ("updateBook", create_update_book_field),
    ("deleteBook", create_delete_book_field),
];

const QUERY_TYPE: &str = "Query";
const MUTATION_TYPE: &str = "Mutation";

/// Schema builder for the book API
pub struct SchemaBuilder {
    store: SharedBookStore,
}

impl SchemaBuilder {
    /// Create a new schema builder over the given store
    pub fn new(store: SharedBookStore) -> Self {
        Self { store }
    }

    /// Names of every query and mutation operation the schema exposes
    pub fn operation_names() -> Vec<&'static str> {
        QUERY_OPERATIONS
            .iter()
            .chain(MUTATION_OPERATIONS)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Build the complete GraphQL schema
    pub fn build_schema(&self) -> Result<Schema> {
        let query = self.root_object(QUERY_TYPE, QUERY_OPERATIONS);
        let mutation = self.root_object(MUTATION_TYPE, MUTATION_OPERATIONS);

        let mut schema_builder = Schema::build(QUERY_TYPE, Some(MUTATION_TYPE), None)
            .register(book_object_type());

        for input in mutation_input_types() {
            schema_builder = schema_builder.register(input);
        }

        for payload in mutation_payload_types() {
            schema_builder = schema_builder.register(payload);
        }

        let schema = schema_builder
            .register(query)
            .register(mutation)
            .finish()
            .map_err(|e| {
                BookshelfError::SchemaGeneration(format!("Failed to build schema: {}", e))
            })?;

        tracing::info!(
            "Schema built with {} queries and {} mutations",
            QUERY_OPERATIONS.len(),
            MUTATION_OPERATIONS.len()
        );

        Ok(schema)
    }

    fn root_object(&self, type_name: &str, operations: &[(&str, FieldFactory)]) -> Object {
        let mut object = Object::new(type_name);

        for &(name, factory) in operations {
            tracing::debug!("Registering {}.{}", type_name, name);
            object = object.field(factory(name, self.store.clone()));
        }

        object
    }
}
