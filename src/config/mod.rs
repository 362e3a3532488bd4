//! Configuration module for the scraper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. A missing file means [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use discogs_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Pausing at least {}ms between requests", config.crawler.min_delay_ms);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{Config, CrawlerConfig, MarketplaceConfig, OutputConfig, UserAgentConfig};

pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
