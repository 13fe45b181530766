//! # Store Configuration
//!
//! Settings an embedding application hands to the catalog.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTORE_*`)
//! 2. Serialized config (JSON/TOML via serde, loaded by the caller)
//! 3. Defaults (this file)

use serde::{Deserialize, Serialize};

use crate::book::BookSeed;
use crate::category::Categories;

/// Environment variable holding a comma-separated category allow-list.
pub const CATEGORIES_ENV: &str = "BOOKSTORE_CATEGORIES";

/// Environment variable overriding the store name.
pub const STORE_NAME_ENV: &str = "BOOKSTORE_STORE_NAME";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Display name of the store.
    pub store_name: String,

    /// Categories a book may be filed under.
    pub categories: Categories,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Bookstore".to_string(),
            categories: Categories::default(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTORE_STORE_NAME`: Override store name
    /// - `BOOKSTORE_CATEGORIES`: Replace the category list, e.g. `"Fiction,Poetry"`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Deserializes books against this store's categories.
    pub fn book_seed(&self) -> BookSeed<'_> {
        BookSeed::new(&self.categories)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup(STORE_NAME_ENV) {
            config.store_name = store_name;
        }

        if let Some(raw) = lookup(CATEGORIES_ENV) {
            let categories = parse_category_list(&raw);
            // An empty list would reject every category; keep the defaults instead
            if !categories.is_empty() {
                config.categories = categories;
            }
        }

        config
    }
}

/// Splits a comma-separated list, trimming whitespace around each name.
pub fn parse_category_list(raw: &str) -> Categories {
    Categories::from_names(raw.split(',').map(str::trim))
}
