/// Book record to GraphQL type mapping
///
/// Every stored column is exposed under its camelCase name. Rows travel through
/// the schema as `Value::Object`s built by `book_to_graphql_value`, and the
/// `Book` object's field resolvers read their value back out of that map.

use crate::store::Book;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, TypeRef};
use async_graphql::{Name, Value};
use indexmap::IndexMap;

/// GraphQL type name of the book object
pub const BOOK_TYPE: &str = "Book";

/// GraphQL field name, scalar type and nullability for each book column
const BOOK_FIELDS: &[(&str, &str, bool)] = &[
    ("id", TypeRef::ID, false),
    ("title", TypeRef::STRING, true),
    ("author", TypeRef::STRING, true),
    ("yearPublished", TypeRef::STRING, true),
    ("review", TypeRef::INT, true),
];

/// Build the `Book` object type
pub fn book_object_type() -> Object {
    let mut object = Object::new(BOOK_TYPE).description("A book in the catalogue");

    for &(field_name, scalar, nullable) in BOOK_FIELDS {
        let type_ref = if nullable {
            TypeRef::named(scalar)
        } else {
            TypeRef::named_nn(scalar)
        };

        let graphql_field = Field::new(field_name, type_ref, move |ctx| {
            FieldFuture::new(async move {
                let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

                if let Value::Object(obj) = parent {
                    if let Some(value) = obj.get(field_name) {
                        return Ok(Some(FieldValue::value(value.clone())));
                    }
                }

                Ok(Some(FieldValue::NULL))
            })
        });

        object = object.field(graphql_field);
    }

    object
}

/// Convert a stored book into a GraphQL object value
///
/// The id is rendered as a string, as GraphQL `ID` values are.
pub fn book_to_graphql_value(book: &Book) -> Value {
    let mut object_map = IndexMap::new();

    object_map.insert(Name::new("id"), Value::String(book.id.to_string()));
    object_map.insert(Name::new("title"), optional_string(&book.title));
    object_map.insert(Name::new("author"), optional_string(&book.author));
    object_map.insert(Name::new("yearPublished"), optional_string(&book.year_published));
    object_map.insert(
        Name::new("review"),
        book.review
            .map(|review| Value::Number(review.into()))
            .unwrap_or(Value::Null),
    );

    Value::Object(object_map)
}

/// Wrap a book as a resolver result for a field of type `Book`
pub fn book_field_value(book: &Book) -> FieldValue<'static> {
    FieldValue::owned_any(book_to_graphql_value(book))
}

fn optional_string(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}
