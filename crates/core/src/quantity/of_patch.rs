//! Geometric quantities of patches

use crate::buffer::{expect_shape, fill_rows, fill_values};
use crate::error::Result;
use crate::index::{as_index, Id};
use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2};

/// Area of every patch by the shoelace formula.
///
/// Corners are read in the order stored in `nodes_at_patch`; [`BAD_INDEX`]
/// slots are skipped, so rows may describe polygons with fewer corners.
/// Corners must wind counter-clockwise. This is not checked: clockwise
/// corners give a negative area.
///
/// [`BAD_INDEX`]: crate::index::BAD_INDEX
///
/// # Panics
/// If `nodes_at_patch` holds an id outside `x_of_node`.
pub fn calc_area_at_patch(
    nodes_at_patch: ArrayView2<'_, Id>,
    x_of_node: ArrayView1<'_, f64>,
    y_of_node: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    expect_shape("y_of_node", y_of_node.shape(), x_of_node.shape())?;
    expect_shape("area_of_patch", out.shape(), &[nodes_at_patch.nrows()])?;

    fill_values(out, |patch| {
        let corners = nodes_at_patch.row(patch);
        let mut valid = corners.iter().filter_map(|&id| as_index(id));

        let Some(first) = valid.next() else {
            return 0.0;
        };
        let mut twice_area = 0.0;
        let mut prev = first;
        for node in valid.chain(std::iter::once(first)) {
            twice_area += x_of_node[prev] * y_of_node[node] - x_of_node[node] * y_of_node[prev];
            prev = node;
        }
        twice_area * 0.5
    });
    Ok(())
}

/// Centroid of every patch, approximated as the mean of its sides' midpoints.
///
/// This is exact for the axis-aligned rectangles of a raster grid. For a
/// general quadrilateral it is not the polygon centroid.
///
/// `x_of_link`/`y_of_link` are link midpoints (see
/// [`calc_midpoint_of_link`](super::calc_midpoint_of_link)); `out` is
/// `(n_patches, 2)`.
pub fn calc_centroid_at_patch(
    links_at_patch: ArrayView2<'_, Id>,
    x_of_link: ArrayView1<'_, f64>,
    y_of_link: ArrayView1<'_, f64>,
    out: ArrayViewMut2<'_, f64>,
) -> Result<()> {
    expect_shape("y_of_link", y_of_link.shape(), x_of_link.shape())?;
    expect_shape("xy_of_patch", out.shape(), &[links_at_patch.nrows(), 2])?;

    fill_rows(out, |patch, mut xy| {
        let (mut x, mut y, mut n) = (0.0, 0.0, 0usize);
        for link in links_at_patch.row(patch).iter().filter_map(|&id| as_index(id)) {
            x += x_of_link[link];
            y += y_of_link[link];
            n += 1;
        }
        if n == 0 {
            xy.fill(f64::NAN);
        } else {
            xy[0] = x / n as f64;
            xy[1] = y / n as f64;
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::BAD_INDEX;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1, Array2};

    #[test]
    fn test_area_of_single_patch() {
        // (0,0), (2,0), (2,1), (0,1) stored NE, NW, SW, SE
        let x = array![0.0, 2.0, 2.0, 0.0];
        let y = array![0.0, 0.0, 1.0, 1.0];
        let patches = array![[2, 3, 0, 1]];

        let mut out = Array1::zeros(1);
        calc_area_at_patch(patches.view(), x.view(), y.view(), out.view_mut()).unwrap();
        assert_eq!(out[0], 2.0);
    }

    #[test]
    fn test_area_sign_follows_winding() {
        let x = array![0.0, 2.0, 2.0, 0.0];
        let y = array![0.0, 0.0, 1.0, 1.0];
        let patches = array![[0, 3, 2, 1]];

        let mut out = Array1::zeros(1);
        calc_area_at_patch(patches.view(), x.view(), y.view(), out.view_mut()).unwrap();
        assert_eq!(out[0], -2.0);
    }

    #[test]
    fn test_area_skips_missing_corners() {
        let x = array![0.0, 4.0, 0.0];
        let y = array![0.0, 0.0, 3.0];
        let patches = array![[0, 1, 2, BAD_INDEX], [BAD_INDEX, BAD_INDEX, BAD_INDEX, BAD_INDEX]];

        let mut out = Array1::zeros(2);
        calc_area_at_patch(patches.view(), x.view(), y.view(), out.view_mut()).unwrap();
        assert_relative_eq!(out[0], 6.0);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn test_centroid_of_rectangle() {
        // Sides of the 2x1 rectangle in E, N, W, S order
        let x_of_link = array![2.0, 1.0, 0.0, 1.0];
        let y_of_link = array![0.5, 1.0, 0.5, 0.0];
        let links = array![[0, 1, 2, 3]];

        let mut out = Array2::zeros((1, 2));
        calc_centroid_at_patch(links.view(), x_of_link.view(), y_of_link.view(), out.view_mut())
            .unwrap();
        assert_eq!(out, array![[1.0, 0.5]]);
    }

    #[test]
    fn test_centroid_rejects_wrong_buffer() {
        let links = array![[0, 1, 2, 3]];
        let xs = array![0.0, 0.0, 0.0, 0.0];

        let mut out = Array2::zeros((1, 3));
        let result = calc_centroid_at_patch(links.view(), xs.view(), xs.view(), out.view_mut());
        assert!(result.is_err());
    }
}
