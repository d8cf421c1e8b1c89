//! Connectivity indexed by link: `nodes_at_link`, `patches_at_link`

use crate::buffer::{expect_shape, fill_rows};
use crate::error::Result;
use crate::index::{to_id, Id, BAD_INDEX};
use crate::shape::{number_of_links, GridShape};
use ndarray::{Array2, ArrayViewMut2};

/// (tail, head) of `link` in a `rows x cols` lattice.
///
/// Accepts degenerate lattices so the dual lattice can reuse it.
#[inline]
pub(crate) fn link_endpoints(rows: usize, cols: usize, link: usize) -> (usize, usize) {
    let n_horizontal = rows * (cols - 1);
    if link < n_horizontal {
        let (row, col) = (link / (cols - 1), link % (cols - 1));
        let tail = row * cols + col;
        (tail, tail + 1)
    } else {
        let tail = link - n_horizontal;
        (tail, tail + cols)
    }
}

/// Fill the (tail, head) pairs of every link of a `rows x cols` lattice
pub(crate) fn write_link_endpoints(rows: usize, cols: usize, out: ArrayViewMut2<'_, Id>) {
    debug_assert_eq!(out.nrows(), number_of_links(rows, cols));
    fill_rows(out, |link, mut row| {
        let (tail, head) = link_endpoints(rows, cols, link);
        row[0] = to_id(tail);
        row[1] = to_id(head);
    });
}

/// Fill `out` with the (tail, head) node pair of each link.
///
/// Horizontal links come first and point +x; vertical links follow and point +y.
///
/// # Errors
/// [`crate::Error::InvalidShape`] for shapes below 2x2,
/// [`crate::Error::ShapeMismatch`] unless `out` is `(n_links, 2)`.
pub fn fill_nodes_at_link(shape: (usize, usize), out: ArrayViewMut2<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("nodes_at_link", out.shape(), &[shape.number_of_links(), 2])?;
    write_link_endpoints(shape.rows(), shape.cols(), out);
    Ok(())
}

/// (tail, head) node pair of each link
pub fn nodes_at_link(shape: GridShape) -> Array2<Id> {
    let mut out = Array2::zeros((shape.number_of_links(), 2));
    write_link_endpoints(shape.rows(), shape.cols(), out.view_mut());
    out
}

fn write_patches_at_link(shape: GridShape, out: ArrayViewMut2<'_, Id>) {
    let (rows, cols) = shape.dim();
    let n_horizontal = shape.number_of_horizontal_links();

    fill_rows(out, |link, mut row| {
        let (right, left) = if link < n_horizontal {
            let (r, c) = (link / (cols - 1), link % (cols - 1));
            let south = (r > 0).then(|| shape.patch(r - 1, c));
            let north = (r < rows - 1).then(|| shape.patch(r, c));
            (south, north)
        } else {
            let (r, c) = shape.row_col(link - n_horizontal);
            let east = (c < cols - 1).then(|| shape.patch(r, c));
            let west = (c > 0).then(|| shape.patch(r, c - 1));
            (east, west)
        };
        row[0] = right.map_or(BAD_INDEX, to_id);
        row[1] = left.map_or(BAD_INDEX, to_id);
    });
}

/// Fill `out` with the patches on the right and left of each link.
///
/// "Right" is relative to the link's direction: the patch below a horizontal
/// link, the patch east of a vertical link. Perimeter links have one
/// [`BAD_INDEX`] slot.
pub fn fill_patches_at_link(shape: (usize, usize), out: ArrayViewMut2<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("patches_at_link", out.shape(), &[shape.number_of_links(), 2])?;
    write_patches_at_link(shape, out);
    Ok(())
}

/// Patches to the (right, left) of each link
pub fn patches_at_link(shape: GridShape) -> Array2<Id> {
    let mut out = Array2::zeros((shape.number_of_links(), 2));
    write_patches_at_link(shape, out.view_mut());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ndarray::array;

    #[test]
    fn test_nodes_at_link_3x3() {
        let shape = GridShape::new(3, 3).unwrap();
        let expected = array![
            [0, 1], [1, 2], [3, 4], [4, 5], [6, 7], [7, 8],
            [0, 3], [1, 4], [2, 5], [3, 6], [4, 7], [5, 8],
        ];
        assert_eq!(nodes_at_link(shape), expected);
    }

    #[test]
    fn test_fill_nodes_at_link_matches_allocating_form() {
        let shape = GridShape::new(4, 5).unwrap();
        let mut out = Array2::from_elem((shape.number_of_links(), 2), 99);
        fill_nodes_at_link((4, 5), out.view_mut()).unwrap();
        assert_eq!(out, nodes_at_link(shape));
    }

    #[test]
    fn test_fill_rejects_bad_buffers() {
        let mut out = Array2::zeros((11, 2));
        assert_eq!(
            fill_nodes_at_link((3, 3), out.view_mut()),
            Err(Error::ShapeMismatch {
                array: "nodes_at_link",
                expected: vec![12, 2],
                actual: vec![11, 2],
            })
        );
        assert!(out.iter().all(|&v| v == 0), "buffer written before rejection");

        assert_eq!(
            fill_patches_at_link((1, 3), out.view_mut()),
            Err(Error::InvalidShape { rows: 1, cols: 3 })
        );
    }

    #[test]
    fn test_patches_at_link_3x3() {
        let shape = GridShape::new(3, 3).unwrap();
        let expected = array![
            [-1, 0], [-1, 1], [0, 2], [1, 3], [2, -1], [3, -1],
            [0, -1], [1, 0], [-1, 1], [2, -1], [3, 2], [-1, 3],
        ];
        assert_eq!(patches_at_link(shape), expected);
    }

    #[test]
    fn test_single_patch_links() {
        let shape = GridShape::new(2, 2).unwrap();
        assert_eq!(nodes_at_link(shape), array![[0, 1], [2, 3], [0, 2], [1, 3]]);
        assert_eq!(patches_at_link(shape), array![[-1, 0], [0, -1], [0, -1], [-1, 0]]);
    }
}
