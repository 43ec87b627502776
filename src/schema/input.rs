/// `BookInput` input object and its conversion into per-operation inputs
///
/// Every `BookInput` field is optional at the GraphQL level. Create ignores any
/// supplied `id`; update requires one. Content fields are never required, and a
/// missing one means "store null".

use crate::error::{BookshelfError, Result};
use crate::store::BookFields;

use async_graphql::dynamic::{InputObject, InputValue, TypeRef};
use async_graphql::Value;

/// GraphQL type name of the mutation input object
pub const BOOK_INPUT_TYPE: &str = "BookInput";

/// Build the `BookInput` input object type
pub fn book_input_type() -> InputObject {
    InputObject::new(BOOK_INPUT_TYPE)
        .description("Field values submitted with createBook and updateBook")
        .field(InputValue::new("id", TypeRef::named(TypeRef::ID)))
        .field(InputValue::new("title", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("author", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("yearPublished", TypeRef::named(TypeRef::STRING)))
        .field(InputValue::new("review", TypeRef::named(TypeRef::INT)))
}

/// Parsed `BookInput` payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookInput {
    pub id: Option<i64>,
    pub fields: BookFields,
}

/// Input of the update operation: the target id plus full replacement values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookUpdate {
    pub id: i64,
    pub fields: BookFields,
}

impl BookInput {
    /// Parse a `BookInput` object value
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(obj) = value else {
            return Err(BookshelfError::InvalidInput(
                "bookData must be an object".to_string(),
            ));
        };

        let id = match obj.get("id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(parse_id(value)?),
        };

        let review = match obj.get("review") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => {
                let review = n
                    .as_i64()
                    .and_then(|r| i32::try_from(r).ok())
                    .ok_or_else(|| {
                        BookshelfError::InvalidInput(format!("review '{}' is not a 32-bit integer", n))
                    })?;
                Some(review)
            }
            Some(other) => {
                return Err(BookshelfError::InvalidInput(format!(
                    "review must be an integer, got {}",
                    other
                )))
            }
        };

        Ok(Self {
            id,
            fields: BookFields {
                title: optional_string(obj.get("title"), "title")?,
                author: optional_string(obj.get("author"), "author")?,
                year_published: optional_string(obj.get("yearPublished"), "yearPublished")?,
                review,
            },
        })
    }

    /// Content fields for a new book; any supplied id is ignored
    pub fn into_new_book(self) -> BookFields {
        if let Some(id) = self.id {
            tracing::debug!("Ignoring id {} supplied to createBook", id);
        }
        self.fields
    }

    /// Update input; the id is required
    pub fn into_update(self) -> Result<BookUpdate> {
        let id = self.id.ok_or_else(|| {
            BookshelfError::InvalidInput("bookData.id is required to update a book".to_string())
        })?;

        Ok(BookUpdate {
            id,
            fields: self.fields,
        })
    }
}

/// Parse a GraphQL `ID` (or `Int`) value into a numeric book id
pub fn parse_id(value: &Value) -> Result<i64> {
    match value {
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|_| BookshelfError::InvalidInput(format!("'{}' is not a valid book id", s))),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| BookshelfError::InvalidInput(format!("'{}' is not a valid book id", n))),
        other => Err(BookshelfError::InvalidInput(format!(
            "'{}' is not a valid book id",
            other
        ))),
    }
}

/// Parse an operationally required id argument
pub fn required_id(value: Option<&Value>, argument: &str) -> Result<i64> {
    match value {
        None | Some(Value::Null) => Err(BookshelfError::InvalidInput(format!(
            "argument '{}' is required",
            argument
        ))),
        Some(value) => parse_id(value),
    }
}

fn optional_string(value: Option<&Value>, field: &str) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(BookshelfError::InvalidInput(format!(
            "{} must be a string, got {}",
            field, other
        ))),
    }
}
