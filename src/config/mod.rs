mod types;

pub use types::{Config, DatabaseConfig, ServerConfig};

use crate::error::{BookshelfError, Result};
use ::config::{Environment, File, FileFormat};
use std::fs;

/// Prefix for environment overrides, e.g. `BOOKSHELF__SERVER__PORT=8080`
const ENV_PREFIX: &str = "BOOKSHELF";

/// Load configuration from a TOML file, layered under `BOOKSHELF__*` environment variables
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| BookshelfError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: Config = ::config::Config::builder()
        .add_source(File::from_str(&contents, FileFormat::Toml))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    validate(&config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    validate(config)?;

    fs::write(path, to_toml(config)?)
        .map_err(|e| BookshelfError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}

/// Render configuration as pretty TOML
pub fn to_toml(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

fn validate(config: &Config) -> Result<()> {
    config.server.validate().map_err(BookshelfError::Config)?;
    config.database.validate().map_err(BookshelfError::Config)?;
    Ok(())
}
