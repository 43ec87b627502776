/// Integration tests for the book GraphQL API
///
/// These tests drive the full schema against an in-memory record store and verify:
/// - Create, read, update and delete round trips
/// - The not-found behaviour of each operation
/// - Full-replace update semantics

mod book_api_tests {
    use async_graphql::dynamic::Schema;
    use async_graphql::{Request, Response, Value};
    use bookshelf::schema::SchemaBuilder;
    use bookshelf::store::SqliteBookStore;
    use serde_json::json;
    use std::sync::Arc;

    async fn build_schema() -> Schema {
        let _ = tracing_subscriber::fmt::try_init();

        let store = SqliteBookStore::in_memory()
            .await
            .expect("Failed to open in-memory store");

        SchemaBuilder::new(Arc::new(store))
            .build_schema()
            .expect("Failed to build schema")
    }

    async fn execute(schema: &Schema, query: &str) -> Response {
        schema.execute(Request::new(query)).await
    }

    fn data(response: Response) -> serde_json::Value {
        assert!(
            response.errors.is_empty(),
            "Query should succeed: {:?}",
            response.errors
        );
        response.data.into_json().expect("Data should convert to JSON")
    }

    fn error_code(response: &Response) -> Option<Value> {
        response
            .errors
            .first()
            .and_then(|e| e.extensions.as_ref())
            .and_then(|ext| ext.get("code").cloned())
    }

    async fn create_dune(schema: &Schema) -> String {
        let response = execute(
            schema,
            r#"
            mutation {
                createBook(bookData: {title: "Dune", author: "Herbert", yearPublished: "1965", review: 5}) {
                    book { id title author yearPublished review }
                }
            }
            "#,
        )
        .await;

        let data = data(response);
        let book = &data["createBook"]["book"];
        assert_eq!(book["title"], "Dune");
        assert_eq!(book["author"], "Herbert");
        assert_eq!(book["yearPublished"], "1965");
        assert_eq!(book["review"], 5);

        book["id"].as_str().expect("id should be a string").to_string()
    }

    #[tokio::test]
    async fn test_create_then_fetch_by_id() {
        let schema = build_schema().await;
        let id = create_dune(&schema).await;

        let query = format!(
            "{{ book(bookId: {}) {{ id title author yearPublished review }} }}",
            id
        );
        let data = data(execute(&schema, &query).await);

        assert_eq!(
            data["book"],
            json!({
                "id": id,
                "title": "Dune",
                "author": "Herbert",
                "yearPublished": "1965",
                "review": 5
            })
        );
    }

    #[tokio::test]
    async fn test_identical_creates_get_distinct_ids() {
        let schema = build_schema().await;

        let first = create_dune(&schema).await;
        let second = create_dune(&schema).await;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_all_books_tracks_creates_and_deletes() {
        let schema = build_schema().await;

        let data_before = data(execute(&schema, "{ allBooks { id } }").await);
        assert_eq!(data_before["allBooks"], json!([]));

        let a = create_dune(&schema).await;
        let b = create_dune(&schema).await;
        let c = create_dune(&schema).await;

        let delete = format!("mutation {{ deleteBook(id: \"{}\") {{ book {{ id }} }} }}", b);
        data(execute(&schema, &delete).await);

        let data_after = data(execute(&schema, "{ allBooks { id } }").await);
        assert_eq!(data_after["allBooks"], json!([{ "id": a }, { "id": c }]));
    }

    #[tokio::test]
    async fn test_update_changes_review() {
        let schema = build_schema().await;
        let id = create_dune(&schema).await;

        let update = format!(
            r#"mutation {{
                updateBook(bookData: {{id: "{}", title: "Dune", author: "Herbert", yearPublished: "1965", review: 9}}) {{
                    book {{ id review }}
                }}
            }}"#,
            id
        );
        let data_update = data(execute(&schema, &update).await);
        assert_eq!(data_update["updateBook"]["book"], json!({ "id": id, "review": 9 }));

        let query = format!("{{ book(bookId: {}) {{ title author yearPublished review }} }}", id);
        let data_fetch = data(execute(&schema, &query).await);
        assert_eq!(
            data_fetch["book"],
            json!({ "title": "Dune", "author": "Herbert", "yearPublished": "1965", "review": 9 })
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_absent_fields_with_null() {
        let schema = build_schema().await;
        let id = create_dune(&schema).await;

        let update = format!(
            r#"mutation {{ updateBook(bookData: {{id: {}, title: "Dune Messiah"}}) {{ book {{ id }} }} }}"#,
            id
        );
        data(execute(&schema, &update).await);

        let query = format!("{{ book(bookId: {}) {{ title author yearPublished review }} }}", id);
        let data_fetch = data(execute(&schema, &query).await);
        assert_eq!(
            data_fetch["book"],
            json!({ "title": "Dune Messiah", "author": null, "yearPublished": null, "review": null })
        );
    }

    #[tokio::test]
    async fn test_update_missing_book_returns_null() {
        let schema = build_schema().await;

        let response = execute(
            &schema,
            r#"mutation { updateBook(bookData: {id: "999", title: "Ghost"}) { book { id } } }"#,
        )
        .await;

        let data = data(response);
        assert_eq!(data["updateBook"], json!({ "book": null }));
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected() {
        let schema = build_schema().await;

        let response = execute(
            &schema,
            r#"mutation { updateBook(bookData: {title: "No id"}) { book { id } } }"#,
        )
        .await;

        assert_eq!(error_code(&response), Some(Value::from("BAD_USER_INPUT")));
    }

    #[tokio::test]
    async fn test_fetch_missing_book_is_not_found() {
        let schema = build_schema().await;

        let response = execute(&schema, "{ book(bookId: 12345) { id } }").await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(error_code(&response), Some(Value::from("NOT_FOUND")));
    }

    #[tokio::test]
    async fn test_delete_then_fetch_is_not_found() {
        let schema = build_schema().await;
        let id = create_dune(&schema).await;

        let delete = format!(
            "mutation {{ deleteBook(id: \"{}\") {{ book {{ id title }} }} }}",
            id
        );
        let data_delete = data(execute(&schema, &delete).await);
        assert_eq!(data_delete["deleteBook"]["book"], json!({ "id": id, "title": "Dune" }));

        let query = format!("{{ book(bookId: {}) {{ id }} }}", id);
        let response = execute(&schema, &query).await;
        assert_eq!(error_code(&response), Some(Value::from("NOT_FOUND")));

        let data_all = data(execute(&schema, "{ allBooks { id } }").await);
        assert_eq!(data_all["allBooks"], json!([]));
    }

    #[tokio::test]
    async fn test_delete_missing_book_is_not_found() {
        let schema = build_schema().await;

        let response = execute(&schema, r#"mutation { deleteBook(id: "77") { book { id } } }"#).await;

        assert_eq!(error_code(&response), Some(Value::from("NOT_FOUND")));
    }

    #[tokio::test]
    async fn test_scalar_coercion_is_left_to_schema() {
        let schema = build_schema().await;

        let response = execute(
            &schema,
            r#"mutation { createBook(bookData: {title: "Dune", review: "five"}) { book { id } } }"#,
        )
        .await;

        assert!(!response.errors.is_empty(), "Non-integer review should be rejected");
    }
}
