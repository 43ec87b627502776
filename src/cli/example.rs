use bookshelf::error::Result;
use bookshelf::store::{BookFields, BookStore};

/// Example catalogue entries: title, author, year published, review
const EXAMPLE_BOOKS: &[(&str, &str, &str, i32)] = &[
    ("Dune", "Frank Herbert", "1965", 5),
    ("Pride and Prejudice", "Jane Austen", "1813", 5),
    ("The Left Hand of Darkness", "Ursula K. Le Guin", "1969", 4),
    ("Beloved", "Toni Morrison", "1987", 5),
    ("Neuromancer", "William Gibson", "1984", 3),
];

/// Content fields for the example catalogue
pub fn example_books() -> Vec<BookFields> {
    EXAMPLE_BOOKS
        .iter()
        .map(|&(title, author, year, review)| BookFields {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            year_published: Some(year.to_string()),
            review: Some(review),
        })
        .collect()
}

/// Insert the example catalogue, returning how many books were added
pub async fn seed_example_books(store: &dyn BookStore) -> Result<usize> {
    let mut count = 0;

    for fields in example_books() {
        let book = store.insert(fields).await?;
        tracing::debug!("Seeded book {} ({:?})", book.id, book.title);
        count += 1;
    }

    Ok(count)
}
