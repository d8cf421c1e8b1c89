//! Connectivity indexed by node: `links_at_node`, `link_dirs_at_node`, `patches_at_node`
//!
//! Each node has four slots. Links are stored East, North, West, South;
//! patches are stored by quadrant NE, NW, SW, SE.

use crate::buffer::{expect_shape, fill_rows};
use crate::error::Result;
use crate::index::{to_id, Id, LinkDir, ABSENT, BAD_INDEX, INCOMING, OUTGOING};
use crate::shape::GridShape;
use ndarray::{Array2, ArrayViewMut2};

/// Links at a node in [E, N, W, S] order, `None` where the grid ends
#[inline]
fn neighbor_links(shape: GridShape, node: usize) -> [Option<usize>; 4] {
    let (rows, cols) = shape.dim();
    let (r, c) = shape.row_col(node);
    [
        (c < cols - 1).then(|| shape.horizontal_link(r, c)),
        (r < rows - 1).then(|| shape.vertical_link(r, c)),
        (c > 0).then(|| shape.horizontal_link(r, c - 1)),
        (r > 0).then(|| shape.vertical_link(r - 1, c)),
    ]
}

fn write_links_at_node(shape: GridShape, out: ArrayViewMut2<'_, Id>) {
    fill_rows(out, |node, mut row| {
        for (slot, link) in neighbor_links(shape, node).into_iter().enumerate() {
            row[slot] = link.map_or(BAD_INDEX, to_id);
        }
    });
}

/// Fill `out` with the links touching each node, in [E, N, W, S] order.
///
/// Slots past the grid edge hold [`BAD_INDEX`].
pub fn fill_links_at_node(shape: (usize, usize), out: ArrayViewMut2<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("links_at_node", out.shape(), &[shape.number_of_nodes(), 4])?;
    write_links_at_node(shape, out);
    Ok(())
}

/// Links touching each node in [E, N, W, S] order
pub fn links_at_node(shape: GridShape) -> Array2<Id> {
    let mut out = Array2::zeros((shape.number_of_nodes(), 4));
    write_links_at_node(shape, out.view_mut());
    out
}

// East and north links start at the node; west and south links end there.
const DIRS: [LinkDir; 4] = [OUTGOING, OUTGOING, INCOMING, INCOMING];

fn write_link_dirs_at_node(shape: GridShape, out: ArrayViewMut2<'_, LinkDir>) {
    fill_rows(out, |node, mut row| {
        for (slot, link) in neighbor_links(shape, node).into_iter().enumerate() {
            row[slot] = if link.is_some() { DIRS[slot] } else { ABSENT };
        }
    });
}

/// Fill `out` with the direction of each link in `links_at_node`.
///
/// [`OUTGOING`] (+1) where the node is the link's tail, [`INCOMING`] (-1)
/// where it is the head, [`ABSENT`] (0) for empty slots.
pub fn fill_link_dirs_at_node(
    shape: (usize, usize),
    out: ArrayViewMut2<'_, LinkDir>,
) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("link_dirs_at_node", out.shape(), &[shape.number_of_nodes(), 4])?;
    write_link_dirs_at_node(shape, out);
    Ok(())
}

/// Direction of each link at each node, matching [`links_at_node`]
pub fn link_dirs_at_node(shape: GridShape) -> Array2<LinkDir> {
    let mut out = Array2::zeros((shape.number_of_nodes(), 4));
    write_link_dirs_at_node(shape, out.view_mut());
    out
}

fn write_patches_at_node(shape: GridShape, out: ArrayViewMut2<'_, Id>) {
    let (rows, cols) = shape.dim();

    fill_rows(out, |node, mut row| {
        let (r, c) = shape.row_col(node);
        let (up, down) = (r < rows - 1, r > 0);
        let (right, left) = (c < cols - 1, c > 0);

        let quadrants = [
            (up && right).then(|| shape.patch(r, c)),
            (up && left).then(|| shape.patch(r, c - 1)),
            (down && left).then(|| shape.patch(r - 1, c - 1)),
            (down && right).then(|| shape.patch(r - 1, c)),
        ];
        for (slot, patch) in quadrants.into_iter().enumerate() {
            row[slot] = patch.map_or(BAD_INDEX, to_id);
        }
    });
}

/// Fill `out` with the patches touching each node, by quadrant [NE, NW, SW, SE].
pub fn fill_patches_at_node(shape: (usize, usize), out: ArrayViewMut2<'_, Id>) -> Result<()> {
    let shape = GridShape::try_from(shape)?;
    expect_shape("patches_at_node", out.shape(), &[shape.number_of_nodes(), 4])?;
    write_patches_at_node(shape, out);
    Ok(())
}

/// Patches touching each node in [NE, NW, SW, SE] order
pub fn patches_at_node(shape: GridShape) -> Array2<Id> {
    let mut out = Array2::zeros((shape.number_of_nodes(), 4));
    write_patches_at_node(shape, out.view_mut());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::as_index;
    use ndarray::array;

    fn shape(rows: usize, cols: usize) -> GridShape {
        GridShape::new(rows, cols).unwrap()
    }

    #[test]
    fn test_links_at_node_3x3() {
        let links = links_at_node(shape(3, 3));
        let expected = array![
            [0, 6, -1, -1], [1, 7, 0, -1], [-1, 8, 1, -1],
            [2, 9, -1, 6], [3, 10, 2, 7], [-1, 11, 3, 8],
            [4, -1, -1, 9], [5, -1, 4, 10], [-1, -1, 5, 11],
        ];
        assert_eq!(links, expected);
    }

    #[test]
    fn test_center_node_dirs() {
        let dirs = link_dirs_at_node(shape(3, 3));
        assert_eq!(dirs.row(4).to_vec(), vec![1, 1, -1, -1]);
        assert_eq!(dirs.row(0).to_vec(), vec![1, 1, 0, 0]);
        assert_eq!(dirs.row(8).to_vec(), vec![0, 0, -1, -1]);
    }

    #[test]
    fn test_dirs_absent_exactly_where_links_absent() {
        let s = shape(4, 6);
        let links = links_at_node(s);
        let dirs = link_dirs_at_node(s);
        for (link, dir) in links.iter().zip(dirs.iter()) {
            assert_eq!(as_index(*link).is_none(), *dir == ABSENT);
        }
    }

    #[test]
    fn test_patches_at_node_3x3() {
        let patches = patches_at_node(shape(3, 3));
        let expected = array![
            [0, -1, -1, -1], [1, 0, -1, -1], [-1, 1, -1, -1],
            [2, -1, -1, 0], [3, 2, 0, 1], [-1, 3, 1, -1],
            [-1, -1, -1, 2], [-1, -1, 2, 3], [-1, -1, 3, -1],
        ];
        assert_eq!(patches, expected);
    }

    #[test]
    fn test_fill_link_dirs_checks_buffer() {
        let mut out = Array2::<LinkDir>::zeros((9, 3));
        assert!(fill_link_dirs_at_node((3, 3), out.view_mut()).is_err());

        let mut out = Array2::<LinkDir>::zeros((9, 4));
        fill_link_dirs_at_node((3, 3), out.view_mut()).unwrap();
        assert_eq!(out, link_dirs_at_node(shape(3, 3)));
    }
}
