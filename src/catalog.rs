//! The catalog of country/capital pairs
//!
//! The catalog is the fixed universe of quizzable items: an ordered,
//! immutable list of pairs where the country name is the identity.
//! A built-in world dataset ships with the binary; a custom catalog can
//! be loaded from a JSON file of the same shape.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in dataset, same shape as a user-supplied catalog file.
const BUILTIN_DATA: &str = include_str!("../data/countries.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog is empty")]
    Empty,

    #[error("Duplicate country in catalog: {0}")]
    DuplicateCountry(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// One country/capital pair. Identity is the country name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub country: String,
    pub capital: String,
}

impl Item {
    /// The value shown as the prompt for a given ask direction
    pub fn prompt(&self, direction: Direction) -> &str {
        match direction {
            Direction::Capital => &self.country,
            Direction::Country => &self.capital,
        }
    }

    /// The value that counts as the correct answer for a given ask direction
    pub fn answer(&self, direction: Direction) -> &str {
        match direction {
            Direction::Capital => &self.capital,
            Direction::Country => &self.country,
        }
    }
}

/// Which side of the pair a question asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Given the country, ask for the capital
    Capital,
    /// Given the capital, ask for the country
    Country,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Capital => write!(f, "capital"),
            Direction::Country => write!(f, "country"),
        }
    }
}

/// Ordered, validated list of items
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty list and duplicate identities
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.country.as_str()) {
                return Err(CatalogError::DuplicateCountry(item.country.clone()));
            }
        }

        Ok(Self { items })
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(BUILTIN_DATA)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file (array of `{country, capital}` objects)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let items: Vec<Item> = serde_json::from_str(&content)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct answer values for a direction, in catalog order
    pub fn distinct_values(&self, direction: Direction) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.items
            .iter()
            .map(|item| item.answer(direction))
            .filter(|value| seen.insert(*value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(country: &str, capital: &str) -> Item {
        Item {
            country: country.to_string(),
            capital: capital.to_string(),
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 4);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(Vec::new());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_country_rejected() {
        let result = Catalog::new(vec![
            item("France", "Paris"),
            item("Japan", "Tokyo"),
            item("France", "Lyon"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateCountry(c)) if c == "France"));
    }

    #[test]
    fn test_duplicate_capitals_allowed() {
        // Only the country side is an identity
        let catalog = Catalog::new(vec![
            item("South Africa", "Pretoria"),
            item("Gauteng", "Pretoria"),
        ])
        .unwrap();
        assert_eq!(catalog.distinct_values(Direction::Capital), vec!["Pretoria"]);
        assert_eq!(catalog.distinct_values(Direction::Country).len(), 2);
    }

    #[test]
    fn test_prompt_and_answer_follow_direction() {
        let it = item("Peru", "Lima");
        assert_eq!(it.prompt(Direction::Capital), "Peru");
        assert_eq!(it.answer(Direction::Capital), "Lima");
        assert_eq!(it.prompt(Direction::Country), "Lima");
        assert_eq!(it.answer(Direction::Country), "Peru");
    }
}
