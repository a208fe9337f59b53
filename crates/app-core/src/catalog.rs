//! Static item catalog
//!
//! The catalog is the ordered, immutable list of items browsed from the
//! Home tab. It is built once at startup and only ever read afterwards:
//! the home list renders it in order and the details screen receives an
//! item's title by value.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two items share the same id
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    /// An item has an empty id
    #[error("Item at position {0} has an empty id")]
    EmptyId(usize),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// A browsable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Remote image URI
    pub image: String,
}

impl Item {
    /// Create a new item
    pub fn new(id: impl Into<String>, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
        }
    }
}

/// Built-in catalog entries: (id, title, image)
const BUILTIN_ITEMS: [(&str, &str, &str); 3] = [
    (
        "1",
        "Item 1",
        "https://as2.ftcdn.net/v2/jpg/04/30/46/87/1000_F_430468753_hjeCITV6815pAztrEiOyElhwCao4v6XS.jpg",
    ),
    (
        "2",
        "Item 2",
        "https://t3.ftcdn.net/jpg/09/63/80/76/240_F_963807674_6wMpeHZYSjCdDSQ19c607lW1Bx2dRRmB.jpg",
    ),
    (
        "3",
        "Item 3",
        "https://t4.ftcdn.net/jpg/09/25/92/25/240_F_925922507_W8pz4XKdByJ1Ditv3lLuh3cETV65Pdok.jpg",
    ),
];

/// Ordered, immutable item catalog
///
/// Ids are guaranteed unique and non-empty once a catalog exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, validating that every id is non-empty and unique
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        let items = BUILTIN_ITEMS
            .iter()
            .map(|(id, title, image)| Item::new(*id, *title, *image))
            .collect();
        Self { items }
    }

    /// Item at a list position
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Look an item up by id
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Iterate items in display order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
