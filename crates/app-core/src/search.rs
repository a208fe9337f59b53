//! Search grid
//!
//! The search screen shows a fixed grid of placeholder images under its
//! search bar. The grid does not depend on the query: typing updates the
//! screen's local state only.

use serde::{Deserialize, Serialize};

/// Image repeated in every grid cell
pub const PLACEHOLDER_IMAGE: &str =
    "https://t4.ftcdn.net/jpg/09/25/92/25/240_F_925922507_W8pz4XKdByJ1Ditv3lLuh3cETV65Pdok.jpg";

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Position in the grid, used as the render key
    pub index: usize,
    /// Image URI
    pub image: String,
}

/// Fixed-size image grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchGrid {
    cells: Vec<GridCell>,
}

impl SearchGrid {
    /// Grid of `len` identical placeholder cells
    pub fn placeholder(len: usize) -> Self {
        let cells = (0..len)
            .map(|index| GridCell {
                index,
                image: PLACEHOLDER_IMAGE.to_string(),
            })
            .collect();
        Self { cells }
    }

    /// Cells in display order
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_grid() {
        let grid = SearchGrid::placeholder(21);
        assert_eq!(grid.len(), 21);
        assert!(grid.cells().iter().all(|c| c.image == PLACEHOLDER_IMAGE));
        assert_eq!(grid.cells()[20].index, 20);
    }

    #[test]
    fn test_empty_grid() {
        assert!(SearchGrid::placeholder(0).is_empty());
        assert!(!SearchGrid::placeholder(20).is_empty());
    }
}
