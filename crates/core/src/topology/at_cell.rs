//! Cells: the dual polygons around interior nodes

use crate::buffer::{expect_shape, fill_values};
use crate::error::Result;
use crate::index::{to_id, Id, BAD_INDEX};
use crate::shape::GridShape;
use ndarray::{Array1, ArrayViewMut1};

#[inline]
fn interior_node(shape: GridShape, cell: usize) -> usize {
    let inner_cols = shape.cols() - 2;
    shape.node(cell / inner_cols + 1, cell % inner_cols + 1)
}

/// Fill `out` with the node each cell surrounds.
///
/// Cells are numbered row-major over the interior nodes, so cell `k` at
/// `(row, col)` of the `(rows - 2, cols - 2)` interior is node
/// `(row + 1) * cols + col + 1`.
pub fn fill_node_at_cell(shape: (usize, usize), out: ArrayViewMut1<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("node_at_cell", out.shape(), &[shape.number_of_cells()])?;
    fill_values(out, |cell| to_id(interior_node(shape, cell)));
    Ok(())
}

/// Node surrounded by each cell
pub fn node_at_cell(shape: GridShape) -> Array1<Id> {
    let mut out = Array1::zeros(shape.number_of_cells());
    fill_values(out.view_mut(), |cell| to_id(interior_node(shape, cell)));
    out
}

#[inline]
fn cell_of(shape: GridShape, node: usize) -> Id {
    let (rows, cols) = shape.dim();
    let (r, c) = shape.row_col(node);
    if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
        BAD_INDEX
    } else {
        to_id((r - 1) * (cols - 2) + c - 1)
    }
}

/// Fill `out` with the cell around each node; perimeter nodes get [`BAD_INDEX`]
pub fn fill_cell_at_node(shape: (usize, usize), out: ArrayViewMut1<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("cell_at_node", out.shape(), &[shape.number_of_nodes()])?;
    fill_values(out, |node| cell_of(shape, node));
    Ok(())
}

/// Cell around each node, [`BAD_INDEX`] on the perimeter
pub fn cell_at_node(shape: GridShape) -> Array1<Id> {
    let mut out = Array1::zeros(shape.number_of_nodes());
    fill_values(out.view_mut(), |node| cell_of(shape, node));
    out
}
