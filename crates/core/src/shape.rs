//! Grid shape and closed-form element numbering

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Shape of a structured-quad grid, measured in nodes.
///
/// Nodes are numbered row-major (`row * cols + col`), row 0 at the bottom.
/// Links are numbered horizontal first, then vertical:
///
/// ```text
///  rows = 3, cols = 4
///
///   8 --6-- 9 --7-- 10 --8-- 11
///   |       |        |       |
///  13      14       15      16
///   |       |        |       |
///   4 --3-- 5 --4-- 6  --5-- 7
///   |       |        |       |
///   9      10       11      12
///   |       |        |       |
///   0 --0-- 1 --1-- 2  --2-- 3
/// ```
///
/// Every count and id is pure arithmetic on `(rows, cols)`; nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// Create a shape, rejecting anything smaller than 2x2
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(Error::InvalidShape { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of node rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of node columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // Counts

    pub fn number_of_nodes(&self) -> usize {
        self.rows * self.cols
    }

    pub fn number_of_horizontal_links(&self) -> usize {
        self.rows * (self.cols - 1)
    }

    pub fn number_of_vertical_links(&self) -> usize {
        (self.rows - 1) * self.cols
    }

    pub fn number_of_links(&self) -> usize {
        number_of_links(self.rows, self.cols)
    }

    pub fn number_of_patches(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }

    /// Faces are the links of the `(rows - 1, cols - 1)` dual lattice
    pub fn number_of_faces(&self) -> usize {
        number_of_links(self.rows - 1, self.cols - 1)
    }

    pub fn number_of_cells(&self) -> usize {
        (self.rows - 2) * (self.cols - 2)
    }

    // Ids

    /// Node at (row, col)
    #[inline]
    pub fn node(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// (row, col) of a node
    #[inline]
    pub fn row_col(&self, node: usize) -> (usize, usize) {
        (node / self.cols, node % self.cols)
    }

    /// Horizontal link whose tail is node (row, col); requires `col < cols - 1`
    #[inline]
    pub fn horizontal_link(&self, row: usize, col: usize) -> usize {
        row * (self.cols - 1) + col
    }

    /// Vertical link whose tail is node (row, col); requires `row < rows - 1`
    #[inline]
    pub fn vertical_link(&self, row: usize, col: usize) -> usize {
        self.number_of_horizontal_links() + row * self.cols + col
    }

    /// Whether `link` is horizontal (points +x) rather than vertical (points +y)
    #[inline]
    pub fn is_horizontal(&self, link: usize) -> bool {
        link < self.number_of_horizontal_links()
    }

    /// Patch whose lower-left corner is node (row, col)
    #[inline]
    pub fn patch(&self, row: usize, col: usize) -> usize {
        row * (self.cols - 1) + col
    }
}

impl TryFrom<(usize, usize)> for GridShape {
    type Error = Error;

    fn try_from((rows, cols): (usize, usize)) -> Result<Self> {
        Self::new(rows, cols)
    }
}

impl From<GridShape> for (usize, usize) {
    fn from(shape: GridShape) -> Self {
        shape.dim()
    }
}

/// Link count of a `rows x cols` lattice.
///
/// Unlike [`GridShape`], this accepts degenerate lattices (a single row or
/// column), which is what the dual lattice of a two-wide grid looks like.
pub fn number_of_links(rows: usize, cols: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    rows * (cols - 1) + (rows - 1) * cols
}
