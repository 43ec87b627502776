use bookshelf::config::{Config, DatabaseConfig};
use bookshelf::error::{BookshelfError, Result};
use bookshelf::store::SqliteBookStore;

/// Run the init command to generate configuration, optionally seeding example books
pub async fn run(
    example: bool,
    database_url: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let mut config = Config::default();
    if let Some(url) = database_url {
        config.database.url = url;
    }

    config.database.validate().map_err(BookshelfError::Config)?;

    if example {
        seed_example_database(&config.database).await?;
    }

    // Output to stdout or file
    let wrote_to_file = if let Some(output_path) = output {
        bookshelf::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated configuration: {}", output_path);
        true
    } else {
        println!("{}", bookshelf::config::to_toml(&config)?);
        false
    };

    tracing::info!("💡 Next steps:");
    if wrote_to_file {
        tracing::info!("   1. Review the generated configuration file");
        tracing::info!("   2. Start server with 'bookshelf serve --config <file>'");
    } else {
        tracing::info!("   1. Save the configuration to a file: bookshelf init --output bookshelf.toml");
        tracing::info!("   2. Start server with 'bookshelf serve'");
    }

    Ok(())
}

/// Create the configured database and fill it with the example catalogue
async fn seed_example_database(database: &DatabaseConfig) -> Result<()> {
    if database.is_in_memory() {
        tracing::warn!("Seeding an in-memory database; the books will not outlive this command");
    }

    tracing::info!("🎨 Seeding example books into {}...", database.url);

    let store = SqliteBookStore::connect(database).await?;
    let count = crate::cli::example::seed_example_books(&store).await?;

    tracing::info!("✨ Added {} example books", count);
    Ok(())
}
