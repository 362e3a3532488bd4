//! Catalog of marketplace categories (styles) a crawl may target
//!
//! The orchestrator only ever talks to [`CategoryCatalog`], so tests and
//! callers can substitute any lookup set for the built-in style list.

mod styles;

use std::collections::HashMap;

pub use styles::MARKETPLACE_STYLES;

/// Lookup set of valid category names
pub trait CategoryCatalog: Send + Sync {
    /// Returns the catalog's own spelling of `name`, if it is listed
    ///
    /// Matching ignores case and runs of whitespace.
    fn resolve(&self, name: &str) -> Option<&str>;

    /// Returns true if `name` is a listed category
    fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// In-memory catalog keyed by normalized name
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: HashMap<String, String>,
}

impl StaticCatalog {
    /// Builds a catalog from canonical category names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(Into::into)
            .map(|name| (catalog_key(&name), normalize_spacing(&name)))
            .collect();
        Self { entries }
    }

    /// The styles offered by the Discogs marketplace style filter
    pub fn marketplace_styles() -> Self {
        Self::new(MARKETPLACE_STYLES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CategoryCatalog for StaticCatalog {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.entries.get(&catalog_key(name)).map(String::as_str)
    }
}

/// Collapses runs of whitespace and trims the ends
pub fn normalize_spacing(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn catalog_key(name: &str) -> String {
    normalize_spacing(name).to_lowercase()
}
