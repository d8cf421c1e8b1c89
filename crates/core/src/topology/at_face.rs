//! Connectivity of faces, the edges of the dual lattice.
//!
//! Patch centers form a `(rows - 1, cols - 1)` lattice whose links are the
//! faces. Faces are therefore numbered exactly like links, one dimension down:
//! faces crossing vertical links first, then faces crossing horizontal links.
//! Every interior link is crossed by exactly one face.

use crate::buffer::{expect_shape, fill_values};
use crate::error::Result;
use crate::index::{to_id, Id, BAD_INDEX};
use crate::shape::GridShape;
use crate::topology::at_link::write_link_endpoints;
use ndarray::{Array1, Array2, ArrayViewMut1, ArrayViewMut2};

/// Fill `out` with the pair of dual nodes each face joins.
///
/// Dual nodes sit at patch centers and share their ids with patches, so each
/// row names the two patches the face separates (west/east, then south/north).
pub fn fill_nodes_at_face(shape: (usize, usize), out: ArrayViewMut2<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("nodes_at_face", out.shape(), &[shape.number_of_faces(), 2])?;
    write_link_endpoints(shape.rows() - 1, shape.cols() - 1, out);
    Ok(())
}

/// Pair of patches each face separates
pub fn nodes_at_face(shape: GridShape) -> Array2<Id> {
    let mut out = Array2::zeros((shape.number_of_faces(), 2));
    write_link_endpoints(shape.rows() - 1, shape.cols() - 1, out.view_mut());
    out
}

#[inline]
fn crossed_link(shape: GridShape, face: usize) -> usize {
    let cols = shape.cols();
    let n_first = (shape.rows() - 1) * (cols - 2);
    if face < n_first {
        let (r, c) = (face / (cols - 2), face % (cols - 2));
        shape.vertical_link(r, c + 1)
    } else {
        let face = face - n_first;
        let (r, c) = (face / (cols - 1), face % (cols - 1));
        shape.horizontal_link(r + 1, c)
    }
}

#[inline]
fn crossing_face(shape: GridShape, link: usize) -> Option<usize> {
    let (rows, cols) = shape.dim();
    if shape.is_horizontal(link) {
        let (r, c) = (link / (cols - 1), link % (cols - 1));
        let n_first = (rows - 1) * (cols - 2);
        (r > 0 && r < rows - 1).then(|| n_first + (r - 1) * (cols - 1) + c)
    } else {
        let (r, c) = shape.row_col(link - shape.number_of_horizontal_links());
        (c > 0 && c < cols - 1).then(|| r * (cols - 2) + c - 1)
    }
}

/// Fill `out` with the link each face crosses
pub fn fill_link_at_face(shape: (usize, usize), out: ArrayViewMut1<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("link_at_face", out.shape(), &[shape.number_of_faces()])?;
    fill_values(out, |face| to_id(crossed_link(shape, face)));
    Ok(())
}

/// Link crossed by each face
pub fn link_at_face(shape: GridShape) -> Array1<Id> {
    let mut out = Array1::zeros(shape.number_of_faces());
    fill_values(out.view_mut(), |face| to_id(crossed_link(shape, face)));
    out
}

/// Fill `out` with the face crossing each link; perimeter links get [`BAD_INDEX`]
pub fn fill_face_at_link(shape: (usize, usize), out: ArrayViewMut1<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("face_at_link", out.shape(), &[shape.number_of_links()])?;
    fill_values(out, |link| crossing_face(shape, link).map_or(BAD_INDEX, to_id));
    Ok(())
}

/// Face crossing each link, [`BAD_INDEX`] on the perimeter
pub fn face_at_link(shape: GridShape) -> Array1<Id> {
    let mut out = Array1::zeros(shape.number_of_links());
    fill_values(out.view_mut(), |link| {
        crossing_face(shape, link).map_or(BAD_INDEX, to_id)
    });
    out
}
