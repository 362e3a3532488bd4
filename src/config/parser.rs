//! Loading of the optional `scraper.toml` file

use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Reads `path` and parses it with [`parse_config`]
///
/// Sections missing from the file fall back to their defaults, so a file
/// holding only `[marketplace] currency = "USD"` is complete.
///
/// ```no_run
/// use std::path::Path;
/// use discogs_scraper::config::load_config;
///
/// # fn main() -> Result<(), discogs_scraper::ConfigError> {
/// let config = load_config(Path::new("scraper.toml"))?;
/// println!("Scraping {} listings priced in {}", config.marketplace.format, config.marketplace.currency);
/// # Ok(())
/// # }
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses TOML text and runs [`validate`] over the result
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Hex SHA-256 of the raw file, logged at startup
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read(path)?;
    Ok(hex::encode(Sha256::digest(&content)))
}

/// [`load_config`] plus [`compute_config_hash`] for the startup log line
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    Ok((config, compute_config_hash(path)?))
}
