//! Connectivity indexed by patch: `nodes_at_patch`, `links_at_patch`

use crate::buffer::{expect_shape, fill_rows};
use crate::error::Result;
use crate::index::{to_id, Id};
use crate::shape::GridShape;
use ndarray::{Array2, ArrayViewMut2};

fn write_nodes_at_patch(shape: GridShape, out: ArrayViewMut2<'_, Id>) {
    let cols = shape.cols();

    fill_rows(out, |patch, mut row| {
        let (r, c) = (patch / (cols - 1), patch % (cols - 1));
        let sw = shape.node(r, c);
        let nw = sw + cols;
        row[0] = to_id(nw + 1);
        row[1] = to_id(nw);
        row[2] = to_id(sw);
        row[3] = to_id(sw + 1);
    });
}

/// Fill `out` with the corner nodes of each patch, counter-clockwise from the
/// north-east corner: [NE, NW, SW, SE].
pub fn fill_nodes_at_patch(shape: (usize, usize), out: ArrayViewMut2<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("nodes_at_patch", out.shape(), &[shape.number_of_patches(), 4])?;
    write_nodes_at_patch(shape, out);
    Ok(())
}

/// Corner nodes of each patch in [NE, NW, SW, SE] order
pub fn nodes_at_patch(shape: GridShape) -> Array2<Id> {
    let mut out = Array2::zeros((shape.number_of_patches(), 4));
    write_nodes_at_patch(shape, out.view_mut());
    out
}

fn write_links_at_patch(shape: GridShape, out: ArrayViewMut2<'_, Id>) {
    let cols = shape.cols();

    fill_rows(out, |patch, mut row| {
        let (r, c) = (patch / (cols - 1), patch % (cols - 1));
        row[0] = to_id(shape.vertical_link(r, c + 1));
        row[1] = to_id(shape.horizontal_link(r + 1, c));
        row[2] = to_id(shape.vertical_link(r, c));
        row[3] = to_id(shape.horizontal_link(r, c));
    });
}

/// Fill `out` with the four sides of each patch in [E, N, W, S] order,
/// which sweeps the patch boundary once counter-clockwise.
pub fn fill_links_at_patch(shape: (usize, usize), out: ArrayViewMut2<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("links_at_patch", out.shape(), &[shape.number_of_patches(), 4])?;
    write_links_at_patch(shape, out);
    Ok(())
}

/// Sides of each patch in [E, N, W, S] order
pub fn links_at_patch(shape: GridShape) -> Array2<Id> {
    let mut out = Array2::zeros((shape.number_of_patches(), 4));
    write_links_at_patch(shape, out.view_mut());
    out
}
