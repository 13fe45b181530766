//! # Categories
//!
//! The finite allow-list a book's category is checked against.
//!
//! Matching is exact and case-sensitive: `"Autobiography"` is valid,
//! `"autobiography"` and `""` are not.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Categories recognized when no custom list is configured.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Autobiography",
    "Biography",
    "Children",
    "Fiction",
    "History",
    "Large Print",
    "Non-fiction",
    "Poetry",
    "Reference",
    "Science",
    "Self-help",
];

/// A set of valid category names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(BTreeSet<String>);

impl Categories {
    /// Builds an allow-list from arbitrary names.
    ///
    /// Empty names are dropped since an empty category means "unset".
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Categories(
            names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Categories::from_names(DEFAULT_CATEGORIES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_autobiography() {
        let categories = Categories::default();
        assert!(categories.contains("Autobiography"));
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_exact_match_only() {
        let categories = Categories::default();
        assert!(!categories.contains("autobiography"));
        assert!(!categories.contains("AUTOBIOGRAPHY"));
        assert!(!categories.contains(" Autobiography"));
        assert!(!categories.contains(""));
        assert!(!categories.contains("bogus"));
    }

    #[test]
    fn test_custom_names_sorted_and_deduplicated() {
        let categories = Categories::from_names(["Travel", "Cooking", "Travel", ""]);
        assert_eq!(categories.names(), vec!["Cooking", "Travel"]);
        assert!(!categories.contains("Fiction"));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let categories = Categories::from_names(["Poetry", "Fiction"]);
        let json = serde_json::to_string(&categories).unwrap();
        assert_eq!(json, r#"["Fiction","Poetry"]"#);

        let parsed: Categories = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, categories);
    }
}
