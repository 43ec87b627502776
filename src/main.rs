use clap::{Parser, Subcommand};
use bookshelf::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version = "0.1.0")]
#[command(about = "GraphQL CRUD API for a catalogue of books", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a configuration file, optionally seeding example books
    Init {
        /// Create the database and seed it with example books
        #[arg(long)]
        example: bool,

        /// SQLite connection URL to write into the configuration
        #[arg(long)]
        database_url: Option<String>,

        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path
        #[arg(long, default_value = "bookshelf.toml")]
        config: String,

        /// Server port (overrides the configured port)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { example, database_url, output } => {
            cli::init::run(example, database_url, output).await?;
        }
        Commands::Serve { config, port } => {
            cli::serve::run(config, port).await?;
        }
    }

    Ok(())
}
